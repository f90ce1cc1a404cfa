use crate::console::{
    run_about, run_diagnose, run_disease, run_symptoms, DiagnoseArgs, DiseaseArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use tht_diagnosis::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Sistem Pakar Diagnosis Penyakit THT",
    about = "Screen ear-nose-throat symptoms with a Naive Bayes ranking, from the command line or over HTTP",
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
    /// List the recognised symptoms with their selection numbers
    Symptoms,
    /// Rank diseases for a set of symptoms
    Diagnose(DiagnoseArgs),
    /// Show the description and recommended actions for a disease
    Disease(DiseaseArgs),
    /// Describe the methodology and limitations of the tool
    About,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the default minimum number of symptoms per diagnosis (1-5)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub(crate) min_symptoms: Option<u8>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Symptoms => {
            run_symptoms();
            Ok(())
        }
        Command::Diagnose(args) => run_diagnose(args),
        Command::Disease(args) => run_disease(args),
        Command::About => {
            run_about();
            Ok(())
        }
    }
}
