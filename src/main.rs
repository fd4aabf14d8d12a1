use std::{fs, net::SocketAddr, process::ExitCode};

use clap::{Parser, Subcommand};
use reckon::{
    interpreter::parser::core::DEFAULT_MAX_DEPTH,
    response::Reply,
    server::{self, ServerConfig},
};
use tracing_subscriber::EnvFilter;

/// reckon evaluates arithmetic expressions built from numbers, `+ - * /`, and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates a single expression and prints the result.
    Eval {
        /// Tells reckon to read the expression from a file.
        #[arg(short, long)]
        file: bool,

        /// Prints the JSON body the HTTP endpoint would return.
        #[arg(short, long)]
        json: bool,

        /// Maximum parenthesis nesting depth.
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        contents: String,
    },
    /// Serves `POST /api/parse` over HTTP.
    Serve {
        /// Address to listen on.
        #[arg(long, env = "RECKON_BIND", default_value = "127.0.0.1:3000")]
        bind: SocketAddr,

        /// Maximum parenthesis nesting depth per request.
        #[arg(long, env = "RECKON_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    match args.command {
        Command::Eval { file,
                        json,
                        max_depth,
                        contents, } => eval(file, json, max_depth, contents),
        Command::Serve { bind, max_depth } => {
            let config = ServerConfig { bind, max_depth };
            match run_server(config) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("{e:#}");
                    ExitCode::FAILURE
                },
            }
        },
    }
}

fn eval(file: bool, json: bool, max_depth: usize, contents: String) -> ExitCode {
    let expression = if file {
        match fs::read_to_string(&contents) {
            Ok(text) => text.trim_end().to_owned(),
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    if json {
        let reply = Reply::evaluated(expression, max_depth);
        match serde_json::to_string_pretty(&reply.body) {
            Ok(body) => println!("{body}"),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        }
        return if reply.status.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    match reckon::evaluate_with_limit(&expression, max_depth) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

#[tokio::main]
async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    server::serve(config).await
}
