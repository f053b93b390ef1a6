use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use paybox_system::application::authorize::AuthorizeRequest;
use paybox_system::application::endpoint::endpoint;
use paybox_system::application::request_builder::RequestBuilder;
use paybox_system::application::response::interpret;
use paybox_system::infrastructure::clock::SystemClock;
use paybox_system::infrastructure::hmac_signer::HmacSha512Signer;
use paybox_system::infrastructure::iso4217::Iso4217Formatter;
use paybox_system::interfaces::json::params_reader::ParamsReader;
use paybox_system::interfaces::reply_reader::read_reply;
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level regardless of RUST_LOG
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the signed authorization form from a JSON parameter file
    Build {
        /// JSON file with the authorization parameters
        params: PathBuf,

        /// Merchant HMAC secret, hex encoded
        #[arg(long, env = "PAYBOX_HMAC_KEY", hide_env_values = true)]
        hmac_key: String,

        /// Target the pre-production gateway
        #[arg(long)]
        test_mode: bool,

        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Print the payment page URL
    Endpoint {
        #[arg(long)]
        test_mode: bool,
    },
    /// Interpret a gateway reply: a query string, or @path to a file holding one (or JSON)
    Interpret { reply: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Redirect form as JSON: url, method and ordered fields
    Json,
    /// Urlencoded form body only
    Form,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    match cli.command {
        Command::Build {
            params,
            hmac_key,
            test_mode,
            format,
        } => {
            let file = File::open(&params).into_diagnostic()?;
            let mut params = ParamsReader::new(file).parameters().into_diagnostic()?;
            params.test_mode |= test_mode;

            let request = AuthorizeRequest::new(RequestBuilder::new(
                Box::new(HmacSha512Signer::from_hex(&hmac_key).into_diagnostic()?),
                Box::new(Iso4217Formatter::new()),
                Box::new(SystemClock),
            ));
            let form = request.redirect(&params).into_diagnostic()?;

            match format {
                Format::Json => {
                    println!("{}", serde_json::to_string_pretty(&form).into_diagnostic()?)
                }
                Format::Form => println!("{}", form.fields.to_form_body().into_diagnostic()?),
            }
        }
        Command::Endpoint { test_mode } => println!("{}", endpoint(test_mode)),
        Command::Interpret { reply } => {
            let raw = match reply.strip_prefix('@') {
                Some(path) => std::fs::read_to_string(path).into_diagnostic()?,
                None => reply,
            };
            let outcome = interpret(&read_reply(&raw).into_diagnostic()?);
            println!("{}", serde_json::to_string(&outcome).into_diagnostic()?);
        }
    }

    Ok(())
}
