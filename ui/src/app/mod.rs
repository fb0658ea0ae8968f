pub mod site;

pub use site::RepairSite;
