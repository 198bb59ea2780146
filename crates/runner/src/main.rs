use flow_rest::{CallOptions, FlowClient, ListQuery, PaymentListQuery};
use std::error::Error;
use std::process::ExitCode;
use tokio::sync::watch;
use tracing::info;

const USAGE: &str = "usage: runner <status TOKEN | payments YYYY-MM-DD | plans>";

enum Command {
    Status(String),
    Payments(String),
    Plans,
}

impl Command {
    fn parse(args: &[String]) -> Option<Self> {
        match args {
            [cmd, token] if cmd == "status" => Some(Self::Status(token.clone())),
            [cmd, date] if cmd == "payments" => Some(Self::Payments(date.clone())),
            [cmd] if cmd == "plans" => Some(Self::Plans),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    common::init_logging();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let Some(command) = Command::parse(&args) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let client = match FlowClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create Flow client");
            return ExitCode::FAILURE;
        }
    };

    info!(
        base_url = %client.config().base_url,
        api_key = client.api_key(),
        "Flow client ready"
    );

    // Create cancel signal channel
    let (cancel_tx, cancel_rx) = watch::channel(false);

    // Spawn ctrl_c handler
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, cancelling request");
            let _ = cancel_tx.send(true);
        }
    });

    let client = client.with_call_options(CallOptions::new().with_cancel(cancel_rx));

    match run(&client, command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Request failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &FlowClient, command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Status(token) => {
            let status = client.payments().get_status(&token).await?;
            println!(
                "{} | flow order {} | {} {} | {}",
                status.commerce_order,
                status.flow_order,
                status.amount,
                status.currency.as_deref().unwrap_or("CLP"),
                status.status
            );
        }
        Command::Payments(date) => {
            let page = client
                .payments()
                .list(date.as_str(), &PaymentListQuery::default())
                .await?;
            let payments = page.items()?;

            for payment in &payments {
                println!(
                    "{} | {} | {} | {}",
                    payment.flow_order, payment.commerce_order, payment.amount, payment.status
                );
            }
            println!("\n{} of {} payments", payments.len(), page.total);
        }
        Command::Plans => {
            let page = client.plans().list(&ListQuery::new()).await?;
            let plans = page.items()?;

            for plan in &plans {
                println!("{} | {} | {}", plan.plan_id, plan.name, plan.amount);
            }
            println!("\n{} of {} plans", plans.len(), page.total);
        }
    }

    Ok(())
}
