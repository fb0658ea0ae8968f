pub mod hero_section;
pub mod service_list;
pub mod status_banner;

pub use hero_section::*;
pub use service_list::*;
pub use status_banner::*;
