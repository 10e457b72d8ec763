//! LUT accelerator bring-up CLI.
//!
//! This binary is the supervisor around the harness library. It performs:
//! 1. **Run:** Load test data, build a backend, run the bring-up sequence, map the verdict to an exit status.
//! 2. **Generate:** Draw random LUT cores and write golden test data as JSON or C arrays.
//! 3. **Decode:** Disassemble custom instruction words.
//!
//! The diagnostic protocol goes to stdout; logs go to stderr (filter with `RUST_LOG`).

use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;
use std::{fs, io};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lutsim_core::accel::{Accelerator, LutCoreModel, Sequenced, SimulatedAccelerator, Watchdog};
use lutsim_core::common::BankCount;
use lutsim_core::config::{BackendKind, Config, ModelKind};
use lutsim_core::data::{GenerateOptions, TestData, emit_c_header, generate};
use lutsim_core::harness::{self, ErrorSink, ExitSignalTrap, Harness, WriterConsole};
use lutsim_core::isa::disassemble;

#[derive(Parser, Debug)]
#[command(
    name = "lutsim",
    author,
    version,
    about = "LUT accelerator bring-up harness",
    long_about = "Run the bring-up sequence against a simulated or RoCC accelerator, generate golden test data, or decode custom instructions.\n\nExamples:\n  lutsim generate --count 50 --seed 7 --out data.json\n  lutsim run --data data.json\n  lutsim run --data data.json --silent --model lut-core\n  lutsim decode 0x0000200b"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the bring-up sequence once.
    Run {
        /// Test data (JSON).
        #[arg(short, long)]
        data: PathBuf,

        /// Harness configuration (JSON); built-in defaults otherwise.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Silent mode: no console text, mismatches raise the fatal signal.
        #[arg(long)]
        silent: bool,

        /// Banks to configure (1 or 2).
        #[arg(long, value_parser = parse_bank_count)]
        banks: Option<BankCount>,

        /// Skip case A (single input).
        #[arg(long)]
        skip_single: bool,

        /// Skip case B (triple input).
        #[arg(long)]
        skip_triple: bool,

        /// Evaluation model of the simulated backend.
        #[arg(long, value_enum)]
        model: Option<ModelArg>,

        /// Per-call latency budget in microseconds.
        #[arg(long)]
        watchdog_us: Option<u64>,

        /// Write the verdict as JSON to this path.
        #[arg(long)]
        report: Option<PathBuf>,

        /// Park forever after the run instead of exiting.
        #[arg(long)]
        idle: bool,
    },

    /// Generate random cores and golden test data.
    Generate {
        /// Vectors per case.
        #[arg(short = 'n', long, default_value_t = 50)]
        count: usize,

        /// RNG seed.
        #[arg(short, long, default_value_t = 0)]
        seed: u64,

        /// Banks to populate (1 or 2).
        #[arg(long, value_parser = parse_bank_count, default_value = "2")]
        banks: BankCount,

        /// Configuration supplying the LUT geometry.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Output path; stdout if omitted.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Disassemble instruction words (hex with `0x`, or decimal).
    Decode {
        /// Instruction words.
        #[arg(required = true)]
        words: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModelArg {
    Golden,
    LutCore,
}

impl From<ModelArg> for ModelKind {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Golden => Self::Golden,
            ModelArg::LutCore => Self::LutCore,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    CHeader,
}

fn parse_bank_count(s: &str) -> Result<BankCount, String> {
    let n: u8 = s.parse().map_err(|e| format!("{e}"))?;
    BankCount::try_from(n).map_err(|e| e.to_string())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            data,
            config,
            silent,
            banks,
            skip_single,
            skip_triple,
            model,
            watchdog_us,
            report,
            idle,
        } => {
            let mut config = load_config(config.as_deref());
            config.harness.verbose &= !silent;
            config.harness.run_single_input_case &= !skip_single;
            config.harness.run_triple_input_case &= !skip_triple;
            if let Some(banks) = banks {
                config.harness.bank_count = banks;
            }
            if let Some(model) = model {
                config.accelerator.model = model.into();
            }
            if watchdog_us.is_some() {
                config.accelerator.watchdog_us = watchdog_us;
            }
            cmd_run(&config, &data, report.as_deref(), idle);
        }
        Commands::Generate {
            count,
            seed,
            banks,
            config,
            format,
            out,
        } => {
            let config = load_config(config.as_deref());
            let options = GenerateOptions {
                geometry: config.lut,
                count,
                seed,
                bank_count: banks,
            };
            cmd_generate(&options, format, out.as_deref());
        }
        Commands::Decode { words } => cmd_decode(&words),
    }
}

/// Prints `message` to stderr and exits with status 1.
fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    process::exit(1);
}

fn load_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format_args!("reading {}: {e}", path.display())));
    let config: Config = serde_json::from_str(&text)
        .unwrap_or_else(|e| fail(format_args!("parsing {}: {e}", path.display())));
    if let Err(e) = config.lut.validate() {
        fail(e);
    }
    config
}

/// Builds the configured backend, wrapped in the ordering checks and optional watchdog.
fn build_accelerator(config: &Config, data: &TestData) -> Box<dyn Accelerator> {
    let backend: Box<dyn Accelerator> = match config.accelerator.backend {
        BackendKind::Simulated => match config.accelerator.model {
            ModelKind::Golden => Box::new(SimulatedAccelerator::golden(data)),
            ModelKind::LutCore => {
                let model = LutCoreModel::new(config.lut);
                let sim = data
                    .bitstreams
                    .banks()
                    .fold(SimulatedAccelerator::new(), |sim, (bank, bitstream)| {
                        sim.with_bank(bank, bitstream.len(), model)
                    });
                Box::new(sim)
            }
        },
        #[cfg(target_arch = "riscv64")]
        BackendKind::Rocc => Box::new(lutsim_core::accel::RoccAccelerator::new()),
        #[cfg(not(target_arch = "riscv64"))]
        BackendKind::Rocc => fail("the RoCC backend is only available on riscv64 targets"),
    };

    let sequenced: Box<dyn Accelerator> = Box::new(Sequenced::for_store(backend, &data.bitstreams));
    match config.accelerator.watchdog_us {
        Some(us) => Box::new(Watchdog::new(sequenced, Duration::from_micros(us))),
        None => sequenced,
    }
}

/// Runs the harness once and exits with 1 if any mismatch was seen.
fn cmd_run(config: &Config, data_path: &Path, report: Option<&Path>, idle: bool) {
    let data = TestData::from_json_file(data_path)
        .unwrap_or_else(|e| fail(format_args!("{}: {e}", data_path.display())));
    if config.accelerator.model == ModelKind::LutCore {
        if let Err(e) = data.bitstreams.validate_lengths(config.lut.register_count()) {
            fail(e);
        }
    }

    let accel = build_accelerator(config, &data);
    let exit_signal = ExitSignalTrap::idle_signal();
    let trap = ExitSignalTrap::new(exit_signal.clone());
    let sink = ErrorSink::select(
        config.harness.verbose,
        Box::new(WriterConsole::stdout()),
        Box::new(trap.clone()),
    );

    let mut harness =
        Harness::new(config.harness, accel, &data, sink).unwrap_or_else(|e| fail(e));
    let verdict = harness.run().unwrap_or_else(|e| fail(e));

    if let Some(path) = report {
        let json = serde_json::to_string_pretty(&verdict).unwrap_or_else(|e| fail(e));
        if let Err(e) = fs::write(path, json) {
            fail(format_args!("writing {}: {e}", path.display()));
        }
        info!(path = %path.display(), "verdict written");
    }

    if idle {
        harness::idle();
    }
    if verdict.failed() || trap.raised() {
        process::exit(1);
    }
}

fn cmd_generate(options: &GenerateOptions, format: Format, out: Option<&Path>) {
    let generated = generate(options).unwrap_or_else(|e| fail(e));
    let text = match format {
        Format::Json => generated.data.to_json().unwrap_or_else(|e| fail(e)),
        Format::CHeader => emit_c_header(&generated.data),
    };
    match out {
        Some(path) => {
            if let Err(e) = fs::write(path, text) {
                fail(format_args!("writing {}: {e}", path.display()));
            }
        }
        None => println!("{text}"),
    }
    info!(
        seed = options.seed,
        vectors = options.count,
        banks = %options.bank_count,
        "test data generated"
    );
}

fn parse_word(raw: &str) -> Result<u32, String> {
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => raw.parse(),
    };
    parsed.map_err(|e| format!("{raw}: {e}"))
}

fn cmd_decode(words: &[String]) {
    for raw in words {
        let word = parse_word(raw).unwrap_or_else(|e| fail(e));
        println!("{word:#010x}  {}", disassemble(word));
    }
}
