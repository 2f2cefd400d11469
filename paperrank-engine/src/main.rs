use anyhow::Result;
use clap::Parser;
use paperrank_engine::config::CliArgs;
use paperrank_engine::server::{PaperRankServer, ServerConfig};
use paperrank_engine::transport::NdjsonTransport;

fn main() -> Result<()> {
	let args = CliArgs::parse();

	// Logs go to stderr; stdout carries protocol frames only
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
		)
		.init();

	let ranking = args.ranking_config();
	tracing::info!(
		similarity = ranking.weights.similarity,
		recency = ranking.weights.recency,
		foundational = ranking.weights.foundational,
		max_results = args.max_results,
		"Ranking configuration"
	);

	let config = ServerConfig {
		server_name: args.server_name,
		server_version: env!("CARGO_PKG_VERSION").to_string(),
		default_max_results: args.max_results,
		ranking,
	};

	let transport = NdjsonTransport::new();
	let mut server = PaperRankServer::new(config, transport);

	tracing::info!("paperrank-engine ready");
	server.run()?;
	Ok(())
}
