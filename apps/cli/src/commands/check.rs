//! `contact check <field> <value>`

use std::io::Write;

use anyhow::Result;
use contact_form::FieldKey;
use contact_validator::field::FieldController;

use super::input_value;

/// Evaluates `key`'s rules against `value`. Returns whether it passed.
pub fn run(out: &mut impl Write, key: FieldKey, value: &str) -> Result<bool> {
    let mut field = FieldController::named(key.name(), key.rules());
    field.set_value(input_value(key, value));
    field.mark_touched();

    let evaluation = field.try_validity()?;
    match evaluation.failure() {
        None => writeln!(out, "{key}: valid")?,
        Some(failure) => writeln!(out, "{key}: {}", failure.description)?,
    }
    Ok(evaluation.is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(key: FieldKey, value: &str) -> (bool, String) {
        let mut out = Vec::new();
        let valid = run(&mut out, key, value).unwrap();
        (valid, String::from_utf8(out).unwrap())
    }

    #[test]
    fn valid_value() {
        assert_eq!(
            check(FieldKey::Email, "al@gmail.co.il"),
            (true, "Email: valid\n".to_string())
        );
    }

    #[test]
    fn letters_in_phone_are_not_counted() {
        assert_eq!(
            check(FieldKey::Phone, "abcdefghij"),
            (false, "Phone number: Phone number must be exactly 10 digits\n".to_string())
        );
    }

    #[test]
    fn first_failing_description_is_printed() {
        assert_eq!(
            check(FieldKey::LastName, "1"),
            (false, "Last name: Input must be minimum 2 characters\n".to_string())
        );
    }
}
