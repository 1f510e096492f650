use std::ffi::OsString;

use log::LevelFilter;
use recoder::{args, help, plan::RecodePlan};

fn main() {
    let arguments: Vec<OsString> = std::env::args_os().collect();
    help::maybe_print_help_and_exit("recode", &arguments);

    let plan = match args::parse_args(arguments) {
        Ok(plan) => plan,
        Err(e) => {
            // nothing was attempted, so this is the one case that fails the process
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    init_logging(&plan);

    // a failed conversion is reported, not propagated: the exit status stays 0
    match plan.execute() {
        Ok(outcome) => println!("{outcome}"),
        Err(e) => println!("Error: {e}"),
    }
}

fn init_logging(plan: &RecodePlan) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if plan.verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}
