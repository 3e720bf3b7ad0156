use std::io;

use proverkacheka::{
    FiscalDocument, FiscalNumber, FiscalSign, Phone, ReceiptRef, SmsPassword, TaxClient,
};

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
    let password = required_env("NALOG_SMS_PASSWORD")?;
    let fiscal_number = required_env("NALOG_FN")?;
    let fiscal_document = required_env("NALOG_FD")?;
    let fiscal_sign = required_env("NALOG_FP")?;

    let mut client = TaxClient::new(Phone::new(phone)?);
    let info = client.login(SmsPassword::new(password)?).await?;
    println!("logged in as {} <{}>", info.name, info.email);

    let receipt = ReceiptRef::new(
        FiscalNumber::new(fiscal_number)?,
        FiscalDocument::new(fiscal_document)?,
        FiscalSign::new(fiscal_sign)?,
    );

    let detail = client.bill_detail(&receipt).await?;
    println!(
        "{} ({}), total {} kopecks",
        detail.user, detail.date_time, detail.total_sum
    );
    for item in &detail.items {
        println!("  {} x{}: {} kopecks", item.name, item.quantity, item.sum);
    }
    Ok(())
}
