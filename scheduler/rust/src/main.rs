use clap::{App, Arg};
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;
use std::cell::RefCell;

use sched_sim::report::{self, RULE};
use sched_sim::{simulate, Comparison, Policy, Regime, SimParams};

#[derive(Debug, Default)]
struct Flags {
    t_option: bool,
    p_option: bool,
}

thread_local!(static TFLAGS: RefCell<Flags> = RefCell::new(Flags::default()));

// prints turnaround per process
macro_rules! t_trace {
    ($($arg:tt)*) => {
        TFLAGS.with(|tflags| {
            if tflags.borrow().t_option {
                print!("{}", format_args!($($arg)*));
            }
        });
    };
}

// prints the generated process parameters
macro_rules! p_trace {
    ($($arg:tt)*) => {
        TFLAGS.with(|tflags| {
            if tflags.borrow().p_option {
                print!("{}", format_args!($($arg)*));
            }
        });
    };
}

struct Args {
    params: SimParams,
    policies: Vec<Policy>,
    seed: Option<u64>,
}

fn valid_schedspec(value: &str) -> Result<(), String> {
    let re = Regex::new(r"^[FSR]+$").map_err(|e| e.to_string())?;
    if !re.is_match(value) {
        Err(format!(
            "Invalid scheduler specification: {}. Must be a combination of F, S and R",
            value
        ))
    } else {
        Ok(())
    }
}

fn print_summary(cmp: &Comparison) {
    p_trace!("<{:-^60}>\n", "Parameters of each Process");
    p_trace!("{}", report::process_table(&cmp.processes));

    println!("<{:-^60}>", "Turnaround times and ATT per policy");
    for outcome in &cmp.outcomes {
        t_trace!("{}", report::turnaround_lines(outcome));
        println!("{}", report::outcome_summary(outcome, cmp.params.d));
        println!("{}", RULE);
    }

    if cmp.outcomes.len() > 1 {
        print!("{}", report::comparison_table(&cmp.processes, &cmp.outcomes));
    }
}

fn actual_main_fn(args: Args) -> sched_sim::Result<()> {
    let params = args.params;
    params.validate()?;

    let regime = match params.regime() {
        Regime::Isolation => "much smaller than",
        Regime::Mixed => "comparable to",
        Regime::Contention => "much larger than",
    };
    println!(
        "d {} is {} k/n {:.2}: contention ratio {:.3}",
        params.d,
        regime,
        params.arrival_spacing(),
        params.contention_ratio()
    );

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let cmp = simulate(&params, rng, &args.policies)?;
    print_summary(&cmp);
    Ok(())
}

fn parse_args(actual_args: &Vec<String>) -> Args {
    let matches = App::new("CPU scheduling simulator")
        .about("Compares FIFO, SJF and SRT over one generated process population")
        .arg(
            Arg::with_name("processes")
                .short('n')
                .long("processes")
                .takes_value(true)
                .default_value("5")
                .help("number of processes"),
        )
        .arg(
            Arg::with_name("arrival_bound")
                .short('k')
                .long("arrival-bound")
                .takes_value(true)
                .default_value("100")
                .help("arrival times are drawn from [0, k)"),
        )
        .arg(
            Arg::with_name("mean")
                .short('d')
                .long("mean")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("500")
                .help("mean service time"),
        )
        .arg(
            Arg::with_name("deviation")
                .short('v')
                .long("deviation")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("10")
                .help("service time standard deviation"),
        )
        .arg(
            Arg::with_name("seed")
                .short('r')
                .long("seed")
                .takes_value(true)
                .help("seed for a reproducible run"),
        )
        .arg(
            Arg::with_name("schedspec")
                .short('s')
                .long("schedspec")
                .takes_value(true)
                .default_value("FSR")
                .validator(valid_schedspec)
                .help("policies to run: F (FIFO), S (SJF), R (SRT)"),
        )
        .arg(
            Arg::with_name("t_flag")
                .short('t')
                .takes_value(false)
                .help("print turnaround of each process"),
        )
        .arg(
            Arg::with_name("p_flag")
                .short('p')
                .takes_value(false)
                .help("print generated process parameters"),
        )
        .get_matches_from(actual_args);

    let params = SimParams::new(
        matches.value_of_t_or_exit("processes"),
        matches.value_of_t_or_exit("arrival_bound"),
        matches.value_of_t_or_exit("mean"),
        matches.value_of_t_or_exit("deviation"),
    );
    let seed = matches
        .is_present("seed")
        .then(|| matches.value_of_t_or_exit::<u64>("seed"));
    let policies = Policy::from_spec(matches.value_of("schedspec").unwrap_or("FSR"));

    TFLAGS.with(|tflags| {
        let mut tflags = tflags.borrow_mut();
        tflags.t_option = matches.is_present("t_flag");
        tflags.p_option = matches.is_present("p_flag");
    });

    Args {
        params,
        policies,
        seed,
    }
}

fn get_default_args() -> Vec<String> {
    vec![
        "sched-sim".to_string(),
        "-n5".to_string(),
        "-k100".to_string(),
        "-d500".to_string(),
        "-v10".to_string(),
        "-sFSR".to_string(),
        "-t".to_string(),
        "-p".to_string(),
    ]
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let default_args = get_default_args();
    let args = std::env::args().collect::<Vec<String>>();
    let actual_args = if args.len() > 1 { &args } else { &default_args };

    let args = parse_args(actual_args);

    if let Err(err) = actual_main_fn(args) {
        eprintln!("error: {}", err);
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn schedspec_accepts_policy_letters_only() {
        assert!(valid_schedspec("FSR").is_ok());
        assert!(valid_schedspec("R").is_ok());
        assert!(valid_schedspec("FX").is_err());
        assert!(valid_schedspec("").is_err());
    }

    #[test]
    fn default_args_parse_to_default_params() {
        let args = parse_args(&get_default_args());
        assert_eq!(args.params, SimParams::default());
        assert_eq!(args.policies, Policy::ALL.to_vec());
        assert_eq!(args.seed, None);
    }

    #[test]
    fn parses_seed_and_negative_deviation() {
        let args = parse_args(&argv(&["sched-sim", "-n", "3", "-v", "-2", "--seed", "42", "-sR"]));
        assert_eq!(args.params.n, 3);
        assert_eq!(args.params.v, -2.0);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.policies, vec![Policy::Srt]);
        assert!(args.params.validate().is_err());
    }

    #[test]
    fn accepts_negative_mean() {
        let args = parse_args(&argv(&["sched-sim", "-d", "-5", "-v", "1"]));
        assert_eq!(args.params.d, -5.0);
        assert_eq!(args.params.validate(), Ok(()));
    }
}
