//! Validates a sign-up form twice: once with mistakes, once corrected.
//!
//! Run with `RUST_LOG=fieldcheck_validator=debug` to see the engine's tracing.

use fieldcheck_validator::prelude::*;
use tracing_subscriber::EnvFilter;

const PASSWORD_TOO_SHORT: u32 = 100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let strings = StringTable::new().with(
        PASSWORD_TOO_SHORT,
        "Password must be at least 8 characters",
    );
    let board = ErrorBoard::new();
    let validator = Validator::new(&strings, &board);

    let username = LiveText::new("al");
    let email_field = LiveText::new("alice@");
    let password = LiveText::new("secret");

    let bindings = [
        Validation::new("username")
            .with_input(&username)
            .with_sink("username")
            .rule(required())
            .and_rule(length_range(3, 16)?.with_text("Username must be 3 to 16 characters"))
            .condition(alphanumeric().with_text("Letters and digits only")),
        Validation::new("email")
            .with_input(&email_field)
            .with_sink("email")
            .rule(required())
            .and_rule(email()),
        Validation::new("password")
            .with_input(&password)
            .with_sink("password")
            .rule(min_length(8).with_resource(PASSWORD_TOO_SHORT))
            .or_rule(predicate("Password needs a digit", |p| {
                p.chars().any(|c| c.is_ascii_digit())
            })),
        Validation::new("plan")
            .with_text("pro")
            .with_sink("plan")
            .or_rule(equal("free"))
            .or_rule(equal("pro")),
    ];

    let mut on_done = listener(
        |values| println!("accepted: {values:?}"),
        || println!("form has errors"),
    );

    let outcome = validator.validate(&mut on_done, &bindings)?;
    println!("first attempt: {outcome:?}");
    for (field, error) in board.errors() {
        println!("  {field}: {error}");
    }

    username.set("alice");
    email_field.set("alice@example.com");
    password.set("s3cretpassword");

    // `plan` only passes once the OR stage accepts any alternative.
    let mut validator = validator;
    validator.set_or_policy(OrPolicy::AnyOf);

    let outcome = validator.validate(&mut on_done, &bindings)?;
    println!("second attempt: {outcome:?}");

    Ok(())
}
