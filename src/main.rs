//! JSON benchmark fixture server entry point.

use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use json_bench::api::create_router;
use json_bench::config::Config;
use json_bench::metrics;
use json_bench::utils::shutdown_signal;

/// Minimal two-route JSON HTTP server fixture.
#[derive(Parser, Debug)]
#[command(name = "json-bench")]
#[command(about = "Two-route JSON HTTP server fixture for load-testing tools")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// Interface to bind (overrides HOST).
    #[arg(long)]
    host: Option<String>,

    /// TCP port to listen on (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the fixture server (default).
    Run {
        /// Interface to bind (overrides HOST).
        #[arg(long)]
        host: Option<String>,

        /// TCP port to listen on (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Run a latency benchmark against an in-process server.
    Benchmark {
        /// Measured requests per route.
        #[arg(short, long, default_value = "100")]
        requests: usize,

        /// In-flight requests for the concurrent burst.
        #[arg(short, long, default_value = "8")]
        concurrency: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("json_bench=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Initialize metrics
    metrics::init_metrics();

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::Run { host, port }) => cmd_run(host, port).await,
        Some(Command::Benchmark {
            requests,
            concurrency,
        }) => cmd_benchmark(requests, concurrency).await,
        None => cmd_run(args.host, args.port).await,
    }
}

/// Run the fixture server.
async fn cmd_run(host_override: Option<String>, port_override: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(host) = host_override {
        config.host = host;
    }
    if let Some(port) = port_override {
        config.port = port;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    let addr = config.listen_addr()?;

    // Bind fails fatally if the port is already in use.
    let listener = TcpListener::bind(addr).await?;
    info!("Fixture server listening on {}", addr);
    info!("Routes: GET /hello, GET /user/:user_id");

    let router = create_router();

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("JSON BENCH FIXTURE - CONFIGURATION CHECK");
    println!("======================================================================");

    // Load configuration
    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    // Validate configuration
    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    // Show configuration summary
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Address: {}:{}", config.host, config.port);
    println!("  Log Level: {}", config.rust_log);
    println!("  Verbose: {}", config.verbose);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run a latency benchmark against an in-process server.
async fn cmd_benchmark(requests: usize, concurrency: usize) -> anyhow::Result<()> {
    // The percentile math below indexes into the measured samples.
    anyhow::ensure!(requests > 0, "requests must be positive");

    println!("======================================================================");
    println!("JSON BENCH FIXTURE - LATENCY BENCHMARK");
    println!("======================================================================");

    // Spin up the fixture on an ephemeral loopback port
    println!("\n1. Starting in-process server...");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    println!("   Listening on {}", addr);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, create_router()).await {
            error!("Benchmark server error: {}", e);
        }
    });

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;
    let base = format!("http://{}", addr);

    // Sequential latency per route
    for (step, route) in ["/hello", "/user/42"].into_iter().enumerate() {
        let url = format!("{base}{route}");

        // Warmup
        for _ in 0..10 {
            let _ = client.get(&url).send().await?;
        }

        println!("\n{}. Benchmarking {route} ({requests} iterations)...", step + 2);
        let mut latencies = Vec::with_capacity(requests);

        for _ in 0..requests {
            let timer = metrics::LatencyTimer::new(route);
            let response = client.get(&url).send().await?;
            let latency_ms = timer.elapsed_ms();

            anyhow::ensure!(
                response.status().is_success(),
                "unexpected status {} from {}",
                response.status(),
                url
            );

            latencies.push(latency_ms);
        }

        latencies.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let avg = latencies.iter().sum::<f64>() / latencies.len() as f64;
        let p50 = latencies[latencies.len() / 2];
        let p95 = latencies[(latencies.len() as f64 * 0.95) as usize];

        println!("   Results:");
        println!("   - Average: {:.3}ms", avg);
        println!("   - P50: {:.3}ms", p50);
        println!("   - P95: {:.3}ms", p95);
        println!("   - Min: {:.3}ms", latencies.first().unwrap());
        println!("   - Max: {:.3}ms", latencies.last().unwrap());
    }

    // Concurrent burst
    println!("\n4. Concurrent burst ({concurrency} in-flight requests)...");
    let start = Instant::now();
    let burst = (0..concurrency).map(|i| {
        let client = client.clone();
        let url = format!("{base}/user/{i}");
        async move { client.get(&url).send().await?.error_for_status() }
    });

    let results = futures::future::join_all(burst).await;
    let burst_ms = start.elapsed().as_secs_f64() * 1000.0;

    let failed = results.iter().filter(|r| r.is_err()).count();
    anyhow::ensure!(failed == 0, "{failed} of {concurrency} burst requests failed");
    println!("   All {} requests completed in {:.3}ms", concurrency, burst_ms);

    println!("\n======================================================================");
    println!("BENCHMARK COMPLETE");
    println!("======================================================================");

    Ok(())
}
