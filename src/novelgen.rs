use anyhow::Result;
use std::env;

use rnovel::{NovelWriter, SampleNovel};

struct Config {
    num_chapters: usize,
    num_paragraphs: usize,
    seed: u64,
    output_file: Option<String>,
    use_brotli: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            num_chapters: 12,
            num_paragraphs: 8,
            seed: 42,
            output_file: None,
            use_brotli: false,
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-chapters" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-chapters requires an argument");
                }
                config.num_chapters = args[i].parse()?;
            }
            "-paragraphs" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-paragraphs requires an argument");
                }
                config.num_paragraphs = args[i].parse()?;
            }
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.seed = args[i].parse()?;
            }
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a file path argument");
                }
                config.output_file = Some(args[i].clone());
            }
            "-brotli" => {
                config.use_brotli = true;
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Warning: Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Sample Novel Generator");
    println!("Usage: novel-gen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -chapters <N>          Number of chapters (default: 12)");
    println!("  -paragraphs <N>        Number of paragraphs per chapter (default: 8)");
    println!("  -seed <N>              RNG seed, same seed gives the same novel (default: 42)");
    println!("  -out <FILE>            Output file path (default: sample.novel)");
    println!("  -brotli                Write compressed novel using Brotli (output: *.novel.br)");
    println!("  -h, -help, --help      Show this help message");
}

fn main() -> Result<()> {
    let config = parse_args()?;

    let output_path = config.output_file.clone().unwrap_or_else(|| {
        if config.use_brotli {
            "sample.novel.br".to_string()
        } else {
            "sample.novel".to_string()
        }
    });

    let novel = SampleNovel::with_config(config.num_chapters, config.num_paragraphs, config.seed)
        .generate();

    let mut writer = NovelWriter::new(&output_path)?;
    writer.write_novel(&novel)?;

    println!(
        "Novel written to: {} ({} chapters, {} paragraphs, {} words)",
        output_path,
        novel.chapters().len(),
        novel.total_paragraphs(),
        novel.total_words()
    );

    Ok(())
}
