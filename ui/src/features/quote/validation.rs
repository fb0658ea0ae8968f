use super::types::{FieldValidation, QuoteFormData, ValidationStates};

/// Strips everything but digits; exactly 10 digits are rewritten as
/// `(XXX) XXX-XXXX`, any other count leaves the input untouched. Wrong digit
/// counts are reported at validation time, not here. Idempotent.
pub fn format_phone_number(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10])
    } else {
        input.to_string()
    }
}

/// Basic email validation: exactly one @, non-empty local part, and a
/// dotted domain of more than two characters.
pub fn is_email_shaped(email: &str) -> bool {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }
    let local_part = parts[0];
    let domain_part = parts[1];
    !local_part.is_empty() && domain_part.contains('.') && domain_part.len() > 2
}

/// Strict check against the normalized `(XXX) XXX-XXXX` shape.
pub fn is_formatted_phone(phone: &str) -> bool {
    let bytes = phone.as_bytes();
    if bytes.len() != 14 {
        return false;
    }
    if bytes[0] != b'(' || bytes[4] != b')' || bytes[5] != b' ' || bytes[9] != b'-' {
        return false;
    }
    [1, 2, 3, 6, 7, 8, 10, 11, 12, 13]
        .iter()
        .all(|&i| bytes[i].is_ascii_digit())
}

fn required_text(value: &str) -> FieldValidation {
    if value.trim().is_empty() {
        FieldValidation::Required
    } else {
        FieldValidation::Valid
    }
}

/// Pure validation pass over the whole form: every required field non-empty
/// after trimming, email matching the address shape, phone matching the
/// normalized pattern. No side effects.
pub fn validate(form: &QuoteFormData) -> ValidationStates {
    let email = form.email.trim();
    let phone = form.phone.trim();
    ValidationStates {
        name: required_text(&form.name),
        email: if email.is_empty() {
            FieldValidation::Required
        } else if is_email_shaped(email) {
            FieldValidation::Valid
        } else {
            FieldValidation::Invalid
        },
        phone: if phone.is_empty() {
            FieldValidation::Required
        } else if is_formatted_phone(phone) {
            FieldValidation::Valid
        } else {
            FieldValidation::Invalid
        },
        message: required_text(&form.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> QuoteFormData {
        QuoteFormData {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            phone: "(123) 456-7890".to_string(),
            message: "Test message".to_string(),
        }
    }

    #[test]
    fn test_format_ten_digit_input() {
        assert_eq!(format_phone_number("1234567890"), "(123) 456-7890");
        assert_eq!(format_phone_number("555-867-5309"), "(555) 867-5309");
        assert_eq!(format_phone_number(" 123 456 7890 "), "(123) 456-7890");
    }

    #[test]
    fn test_format_is_idempotent() {
        let once = format_phone_number("1234567890");
        assert_eq!(format_phone_number(&once), once);
    }

    #[test]
    fn test_format_leaves_wrong_digit_counts_alone() {
        assert_eq!(format_phone_number("123456789"), "123456789");
        assert_eq!(format_phone_number("12345678901"), "12345678901");
        assert_eq!(format_phone_number("call me"), "call me");
        assert_eq!(format_phone_number(""), "");
    }

    #[test]
    fn test_validate_accepts_filled_form() {
        let report = validate(&filled_form());
        assert!(report.is_valid());
    }

    #[test]
    fn test_empty_or_whitespace_fields_are_required() {
        for blank in ["", "   ", "\t\n"] {
            let mut form = filled_form();
            form.name = blank.to_string();
            let report = validate(&form);
            assert_eq!(report.name, FieldValidation::Required);
            assert!(!report.is_valid());

            let mut form = filled_form();
            form.message = blank.to_string();
            assert!(!validate(&form).is_valid());
        }
    }

    #[test]
    fn test_missing_name_invalidates_otherwise_valid_form() {
        let mut form = filled_form();
        form.name = String::new();
        form.email = "a@b.com".to_string();
        form.message = "hi".to_string();
        let report = validate(&form);
        assert_eq!(report.name, FieldValidation::Required);
        assert_eq!(report.email, FieldValidation::Valid);
        assert_eq!(report.phone, FieldValidation::Valid);
        assert_eq!(report.message, FieldValidation::Valid);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_email_shape() {
        assert!(is_email_shaped("test@example.com"));
        assert!(is_email_shaped("a@b.co"));
        assert!(!is_email_shaped("no-at-sign.com"));
        assert!(!is_email_shaped("two@@example.com"));
        assert!(!is_email_shaped("@example.com"));
        assert!(!is_email_shaped("user@nodot"));
    }

    #[test]
    fn test_unformatted_phone_is_invalid_not_required() {
        let mut form = filled_form();
        form.phone = "12345".to_string();
        assert_eq!(validate(&form).phone, FieldValidation::Invalid);

        form.phone = "123-456-7890".to_string();
        assert_eq!(validate(&form).phone, FieldValidation::Invalid);

        form.phone = "(123) 456-7890".to_string();
        assert_eq!(validate(&form).phone, FieldValidation::Valid);
    }
}
