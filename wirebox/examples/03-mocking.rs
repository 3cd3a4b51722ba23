use std::sync::Arc;
use wirebox::auto_register;

trait Mailer: Send + Sync {
    fn send(&self, to: &str) -> String;
}

struct SmtpMailer;

impl Mailer for SmtpMailer {
    fn send(&self, to: &str) -> String {
        format!("smtp delivery to {to}")
    }
}

struct NullMailer;

impl Mailer for NullMailer {
    fn send(&self, to: &str) -> String {
        format!("dropped mail to {to}")
    }
}

fn smtp_mailer() -> Arc<dyn Mailer> {
    Arc::new(SmtpMailer)
}

#[auto_register(Arc<dyn Mailer>, smtp_mailer)]
struct Dependencies;

// Overrides are active in debug builds only; run this example without
// --release to see the substitution.
fn main() {
    println!("{}", Dependencies::resolve_mailer().send("ops@example.com"));

    Dependencies::mock_mailer(Some(Box::new(|| Arc::new(NullMailer))));
    println!("{}", Dependencies::resolve_mailer().send("ops@example.com"));

    Dependencies::mock_mailer(None);
    println!("{}", Dependencies::resolve_mailer().send("ops@example.com"));
}
