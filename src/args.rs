use clap::Parser;

/// Starts a mock REST Api simulating four relay/dimmer channels.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct ServerArgs {
    /// The listen address to bind to.
    #[clap(short, long, env = "RELAY_MOCK_BIND", default_value = "0.0.0.0:3000")]
    pub bind: String,

    /// A unique identifier for this server instance.
    #[clap(short, long, default_value = "relay-mock")]
    pub instance_name: String,
}

/// Interactive shell sending commands like "relay 2 on" to a running relay-mock.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct ShellArgs {
    /// Base url of the relay-mock server.
    #[clap(short, long, env = "RELAY_MOCK_URL", default_value = "http://127.0.0.1:3000")]
    pub server: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_defaults_to_port_3000() {
        let args = ServerArgs::parse_from(["relay-mock"]);
        assert!(args.bind.ends_with(":3000"));
        assert_eq!(args.instance_name, "relay-mock");
    }

    #[test]
    fn bind_can_be_overridden() {
        let args = ServerArgs::parse_from(["relay-mock", "--bind", "127.0.0.1:8080"]);
        assert_eq!(args.bind, "127.0.0.1:8080");
    }
}
