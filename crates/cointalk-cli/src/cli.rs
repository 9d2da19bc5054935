use clap::Parser;

/// Send one message through the cointalk chat service and print the reply.
#[derive(Debug, Parser)]
#[command(name = "cointalk", version, about)]
pub struct Cli {
    /// Message to send, e.g. "deposit 200 USD" or "qual meu saldo"
    pub message: String,

    /// Authorization header value forwarded verbatim to the gateway
    /// (e.g. "Bearer eyJ..."). Without it, only help works.
    #[arg(long)]
    pub token: Option<String>,

    /// Gateway base URL; overrides the GATEWAY_BASE environment variable.
    #[arg(long)]
    pub gateway: Option<String>,

    /// Print the full outcome (reply, published flag, event) as JSON.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_message_with_flags() {
        let cli = Cli::parse_from([
            "cointalk",
            "deposit 200 USD",
            "--token",
            "Bearer tok",
            "--json",
        ]);
        assert_eq!(cli.message, "deposit 200 USD");
        assert_eq!(cli.token.as_deref(), Some("Bearer tok"));
        assert!(cli.json);
        assert!(cli.gateway.is_none());
    }
}
