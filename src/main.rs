use cafe_likes::{
    ButtonLabel, Config, Container, LikeButton, LikeToggleHandler, MemoryButton, ToContext,
};
use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "cafe-likes", about = "Like or unlike a cafe from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Flip the like state and print the new button label
    Toggle(Target),
    /// Print the label the like button should currently show
    Status(Target),
}

#[derive(Args)]
struct Target {
    #[arg(long, env = "CAFE_ID")]
    cafe_id: String,
    #[arg(long, env = "LOGGED_USER")]
    user_id: String,
}

impl Target {
    fn button(&self) -> MemoryButton {
        MemoryButton::new(
            Container::for_cafe(&self.cafe_id, &self.user_id),
            ButtonLabel::Like,
        )
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    let ctx = match Config::from_env() {
        Ok(config) => config.to_context().await,
        Err(err) => Err(err),
    };
    let ctx = match ctx {
        Ok(ctx) => Arc::new(ctx),
        Err(err) => {
            tracing::error!("Invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let (target, toggle) = match &cli.command {
        Command::Toggle(target) => (target, true),
        Command::Status(target) => (target, false),
    };
    let handler = LikeToggleHandler::new(ctx, Arc::new(target.button()));

    let result = if toggle {
        handler.handle_click().await.map(|_| ())
    } else {
        handler.refresh().await.map(|_| ())
    };

    match result {
        Ok(()) => {
            println!("{}", handler.button().label());
            ExitCode::SUCCESS
        }
        Err(err) => {
            for notice in handler.button().notices() {
                eprintln!("{}", notice.message);
            }
            tracing::debug!("Request failed: {:?} ({})", err.kind(), err);
            ExitCode::FAILURE
        }
    }
}
