use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use nodecondition_k8s::{ConnectionConfig, KubeClient};

mod dispatch;

use dispatch::Invocation;

const EXAMPLES: &str = "\
Examples:
  # output current node condition data for each node
  kubectl node-condition

  # get node conditions for a single node
  kubectl node-condition [node]

  # output a simplified json object with condition data for each node
  kubectl node-condition --output json";

/// A kubectl plugin to output node conditions
#[derive(Parser, Debug)]
#[command(name = "node-condition")]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
struct Args {
    /// Only show this node
    #[arg(value_name = "NODE")]
    node: Option<String>,

    /// Format to output node condition data (one of "cli" or "json")
    #[arg(short, long, default_value = "cli")]
    output: String,

    /// Path to the kubeconfig file to use
    #[arg(long, value_name = "PATH")]
    kubeconfig: Option<PathBuf>,

    /// The name of the kubeconfig context to use
    #[arg(long)]
    context: Option<String>,

    /// The name of the kubeconfig cluster to use
    #[arg(long)]
    cluster: Option<String>,

    /// The name of the kubeconfig user to use
    #[arg(long)]
    user: Option<String>,
}

impl Args {
    fn connection_config(&self) -> ConnectionConfig {
        ConnectionConfig {
            kubeconfig: self.kubeconfig.clone(),
            context: self.context.clone(),
            cluster: self.cluster.clone(),
            user: self.user.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only rendered output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_line(&e));
            ExitCode::FAILURE
        }
    }
}

/// The single stderr line reported for a failed invocation
fn error_line(err: &anyhow::Error) -> String {
    format!("Error: {:#}", err)
}

async fn run(args: Args) -> Result<()> {
    let invocation = Invocation::new(args.node.clone(), &args.output)?;
    let client = KubeClient::connect(&args.connection_config()).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    invocation.execute(&client, &mut out).await?;
    out.flush()?;

    Ok(())
}
