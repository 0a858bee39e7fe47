use crate::demo::{run_demo, DemoArgs};
use crate::server;
use crate::tools::{
    run_agreement, run_emi, run_rent, run_verify, AgreementArgs, EmiArgs, RentArgs, VerifyArgs,
};
use clap::{Args, Parser, Subcommand};
use estate_flow::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Estate Flow",
    about = "Run the property marketplace wizards and calculators from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Calculate a home loan EMI with its principal and interest split
    Emi(EmiArgs),
    /// Estimate the monthly rent band for a property
    Rent(RentArgs),
    /// Draft a rental agreement from a JSON request file
    Agreement(AgreementArgs),
    /// Score property documents against the required verification checklist
    Verify(VerifyArgs),
    /// Walk the onboarding and listing wizards end to end
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Emi(args) => run_emi(args),
        Command::Rent(args) => run_rent(args),
        Command::Agreement(args) => run_agreement(args),
        Command::Verify(args) => run_verify(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["estate-flow-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn rent_arguments_parse_domain_types() {
        let cli = Cli::try_parse_from([
            "estate-flow-api",
            "rent",
            "--area",
            "1200",
            "--bedrooms",
            "2",
            "--property-type",
            "villa",
            "--furnishing",
            "semi",
            "--amenity",
            "Gym",
            "--amenity",
            "Parking",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Rent(args)) => {
                assert_eq!(args.area, 1200.0);
                assert_eq!(args.amenity.len(), 2);
            }
            other => panic!("expected rent command, got {other:?}"),
        }
    }

    #[test]
    fn agreement_accepts_a_start_date_override() {
        let cli = Cli::try_parse_from([
            "estate-flow-api",
            "agreement",
            "lease.json",
            "--start-date",
            "2026-11-01",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Agreement(args)) => {
                assert_eq!(
                    args.start_date,
                    chrono::NaiveDate::from_ymd_opt(2026, 11, 1)
                );
            }
            other => panic!("expected agreement command, got {other:?}"),
        }

        let bad_date = Cli::try_parse_from([
            "estate-flow-api",
            "agreement",
            "lease.json",
            "--start-date",
            "01/11/2026",
        ]);
        assert!(bad_date.is_err());
    }

    #[test]
    fn verify_collects_documents_and_statuses() {
        let cli = Cli::try_parse_from([
            "estate-flow-api",
            "verify",
            "--document",
            "title_deed=deed.pdf",
            "--document",
            "photos=front.jpg",
            "--verified",
            "title_deed",
            "--instant",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Verify(args)) => {
                assert_eq!(args.documents.len(), 2);
                assert_eq!(args.verified.len(), 1);
                assert!(args.instant);
            }
            other => panic!("expected verify command, got {other:?}"),
        }
    }

    #[test]
    fn unknown_role_is_a_parse_error() {
        let result = Cli::try_parse_from(["estate-flow-api", "demo", "--role", "landlord"]);
        assert!(result.is_err());
    }
}
