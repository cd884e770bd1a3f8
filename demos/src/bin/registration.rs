//! Feeds canonical registration bodies through a fully assembled pipeline.
//!
//! ```text
//! cargo run -p turnstile-demos --bin registration
//! ```

use turnstile_demos::rules::{email_rules, name_rules};
use turnstile_demos::{User, user_decoder};
use turnstile_pipeline::Pipeline;
use turnstile_validator::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let server = Pipeline::decoding(user_decoder())
        .validating(name_rules::name_is_not_empty().and(email_rules::email_contains_at_sign()))
        .handling(|user: &User| format!("Received user: {user}"));

    let bodies = [
        r#"{"name": "Gregor", "age": 32, "email": "Gregor.Trefs@gmail.com"}"#,
        r#"{"name": "Gregor", "age": 32, "email": "Gregorgmail.com"}"#,
        "{{{{{{}{}{}[[]]",
        r#"{"name": "Gregor", "age": 32}"#,
    ];

    for body in bodies {
        let response = server.respond(body);
        println!(
            "{} {} <- {body}",
            response.status().status_code(),
            response.body()
        );
    }
}
