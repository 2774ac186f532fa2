use clap::Parser;

use msdf2bmfont::command::{run, Cli};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(-1);
        }
    };

    match run(cli.command) {
        Ok(path) => println!("Wrote {}", path.display()),
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }
}
