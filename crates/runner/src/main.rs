use globitex_rest::{EurowalletClient, GlobitexError, PaymentInstruction};
use rust_decimal::Decimal;
use std::process::ExitCode;
use tracing::{error, info};

const USAGE: &str = "usage:
  runner status
  runner pay <account> <amount> <beneficiary-name> <beneficiary-account> <reference> [beneficiary-address] [--gbx-fee]";

#[derive(Debug)]
enum Command {
    Status,
    Pay(PaymentInstruction),
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    match args.first().map(String::as_str) {
        Some("status") => Ok(Command::Status),
        Some("pay") => {
            let use_gbx = args.iter().any(|a| a == "--gbx-fee");
            let positional: Vec<&str> = args[1..]
                .iter()
                .map(String::as_str)
                .filter(|a| *a != "--gbx-fee")
                .collect();

            let [account, amount, name, beneficiary, reference, rest @ ..] = positional.as_slice()
            else {
                return Err("pay needs five arguments".into());
            };
            if rest.len() > 1 {
                return Err("too many arguments for pay".into());
            }

            let amount: Decimal = amount
                .parse()
                .map_err(|e| format!("invalid amount '{}': {}", amount, e))?;

            let mut payment = PaymentInstruction::new(
                auth::now_ms(),
                *account,
                amount,
                *name,
                *beneficiary,
                *reference,
            )
            .with_gbx_for_fee(use_gbx);
            if let Some(address) = rest.first() {
                payment = payment.with_beneficiary_address(*address);
            }

            Ok(Command::Pay(payment))
        }
        _ => Err("unknown command".into()),
    }
}

async fn run(command: Command) -> Result<(), GlobitexError> {
    // Secrets and encoding are checked here, before any request is built.
    let client = EurowalletClient::from_env()?;

    match command {
        Command::Status => {
            let status = client.account_status().await?;
            for account in &status.accounts {
                println!("{} | {} | balance: {}", account.iban, account.status, account.balance);
            }
        }
        Command::Pay(payment) => {
            let response = client.submit_payment(payment).await?;
            println!("payment {} | status: {}", response.payment_id, response.status);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    common::init_logging();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            return ExitCode::from(2);
        }
    };

    info!(command = ?command, "Starting");

    match run(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            for api_error in e.api_errors() {
                error!(code = api_error.code, message = %api_error.message, "Remote error");
            }
            error!(error = %e, "Request failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_status() {
        assert!(matches!(parse_args(&args(&["status"])), Ok(Command::Status)));
    }

    #[test]
    fn test_parse_pay() {
        let command = parse_args(&args(&[
            "pay",
            "LT543080020000000224",
            "1.50",
            "UAB Decentralized",
            "LT593910020000000053",
            "Invoice 42",
            "Vilnius",
            "--gbx-fee",
        ]))
        .unwrap();

        let Command::Pay(payment) = command else {
            panic!("expected pay command");
        };
        assert_eq!(payment.amount().to_string(), "1.50");
        assert_eq!(payment.beneficiary_address(), Some("Vilnius"));
        assert!(payment.use_gbx_for_fee());
        assert!(payment.request_time() > 0);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["pay", "A", "1"])).is_err());
        assert!(parse_args(&args(&["pay", "A", "abc", "N", "B", "R"])).is_err());
        assert!(parse_args(&args(&["pay", "A", "1", "N", "B", "R", "X", "Y"])).is_err());
    }
}
