use clap::Parser;

use relay_mock::args::ServerArgs;
use relay_mock::server::{self, ServerState};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = ServerArgs::parse();
    let state = ServerState::new(&args.instance_name);
    return server::run(&args.bind, state);
}
