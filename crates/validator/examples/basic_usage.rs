use contact_validator::prelude::*;

fn main() {
    let rules = RuleSet::builder()
        .validator("Input must contain only alphabet letters", ascii_alphabetic())
        .validator("Input must be minimum 2 characters", min_length(2))
        .build();

    let mut field = FieldController::named("first_name", rules);
    for value in ["A1", "A", "Al"] {
        field.set_value(value);
        field.mark_blurred();
        match field.show_error(false) {
            Some(message) => println!("{value:>4}: {message}"),
            None => println!("{value:>4}: ok"),
        }
    }
}
