use std::io::{BufRead, Write};

use clap::Parser;
use log::warn;

use relay_mock::args::ShellArgs;
use relay_mock::client::{RelayClient, RemoteChannel};
use relay_mock::phrase::{Phrase, PhraseParser};

fn on_off(on: bool) -> &'static str {
    if on {
        "ON"
    } else {
        "OFF"
    }
}

fn print_channel(channel: &RemoteChannel) {
    println!("relay {}: {}, brightness {}%", channel.id, on_off(channel.on), channel.brightness);
}

fn run_phrase(client: &RelayClient, phrase: Phrase) -> anyhow::Result<()> {
    match phrase {
        Phrase::Status => {
            for (id, state) in client.status()? {
                println!("relay {}: {}, brightness {}%", id, on_off(state.on), state.brightness);
            }
        }
        Phrase::Power(id, command) => print_channel(&client.set_power(id, command)?),
        Phrase::Brightness(id, brightness) => print_channel(&client.set_brightness(id, brightness)?),
    }
    return Ok(());
}

/// Reads commands like "relay 2 on" from stdin and sends them to the server.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = ShellArgs::parse();
    let client = RelayClient::new(&args.server);
    let parser = PhraseParser::new()?;
    println!("Say commands like \"relay 2 on\", \"relay 3 brightness 50\", or \"state\"");

    let stdin = std::io::stdin();
    let mut input = String::new();
    loop {
        print!("relay> ");
        std::io::stdout().flush()?;
        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim();
        if line.is_empty() {
            continue;
        }
        if line == "help" {
            println!("Valid commands are: relay N on, relay N off, relay N brightness NUM, state (N in 1-4)");
            continue;
        }
        match parser.parse(line) {
            Some(phrase) => {
                if let Err(err) = run_phrase(&client, phrase) {
                    warn!("command failed: {:#}", err);
                }
            }
            None => println!("unrecognized command, try 'help'"),
        }
    }
    return Ok(());
}
