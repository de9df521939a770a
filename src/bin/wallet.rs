use std::fs;

use clap::Parser;
use color_eyre::eyre::{bail, Result};
use dotenv::dotenv;
use plasma_chain::{
    chain::Input,
    config::loader::load_toml_wallet,
    wallet::wallet::Wallet,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value_t = String::from("./configs/wallet.toml")
    )]
    config_path: String,

    #[arg(short, long)]
    action: String,

    /// Path to a JSON-encoded input, required by the hash and sign actions.
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,
}

#[derive(Debug)]
enum Action {
    Address,
    HashInput,
    SignInput,
}

impl Action {
    fn from(action: &str) -> Result<Action> {
        match action {
            "address" => Ok(Action::Address),
            "hash" => Ok(Action::HashInput),
            "sign" => Ok(Action::SignInput),
            _ => bail!("Invalid action {}", action),
        }
    }
}

fn load_input(path: Option<&str>) -> Result<Input> {
    let Some(path) = path else {
        bail!("this action needs --input <FILE>");
    };
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn run_action(wallet: &Wallet, action: Action, input: Option<&str>) -> Result<()> {
    match action {
        Action::Address => {
            println!("{}", wallet.address());
        }
        Action::HashInput => {
            let input = load_input(input)?;
            println!("hash:     {}", input.hash());
            println!("sig hash: {}", input.sig_hash());
        }
        Action::SignInput => {
            let input = load_input(input)?;
            log::debug!("Signing input {:?}", input);
            println!("{}", wallet.sign_input(&input)?);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    dotenv().ok();
    color_eyre::install()?;
    env_logger::init();

    let cli = Args::parse();
    let config = load_toml_wallet(cli.config_path.as_str())?;
    let wallet = Wallet::new(config)?;
    run_action(&wallet, Action::from(cli.action.as_str())?, cli.input.as_deref())
}
