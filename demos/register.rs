use std::io;

use proverkacheka::{Email, Phone, TaxClient};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let phone = required_env("NALOG_PHONE")?;
    let email = required_env("NALOG_EMAIL")?;

    let client = TaxClient::new(Phone::new(phone)?);
    client.register(Email::new(email)?).await?;

    println!("registered; an SMS with the login code is on its way");
    Ok(())
}
