use crate::features::quote::FieldValidation;

pub fn validation_class(validation: FieldValidation) -> &'static str {
    match validation {
        FieldValidation::Valid => "input-field input-valid",
        FieldValidation::Required | FieldValidation::Invalid => "input-field input-invalid",
        FieldValidation::None => "input-field",
    }
}

pub fn validation_style(validation: FieldValidation) -> &'static str {
    match validation {
        FieldValidation::Valid => "border: 2px solid #4caf50; background-color: #f0fdf4;",
        FieldValidation::Required | FieldValidation::Invalid => {
            "border: 2px solid #f44336; background-color: #fef2f2;"
        }
        FieldValidation::None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_states_share_the_error_class() {
        assert_eq!(
            validation_class(FieldValidation::Required),
            validation_class(FieldValidation::Invalid)
        );
        assert_ne!(
            validation_class(FieldValidation::Valid),
            validation_class(FieldValidation::Invalid)
        );
        assert_eq!(validation_class(FieldValidation::None), "input-field");
    }
}
