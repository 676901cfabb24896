use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::env;
use std::process::ExitCode;
use std::sync::LazyLock;
use uintcoll::{Element, ElementWidth, LinkedList, Vector};

static CLI_DEBUG: LazyLock<bool> = LazyLock::new(|| {
    env::var("UINTCOLL_DEBUG")
        .map(|debug| debug.contains('1'))
        .unwrap_or(false)
});

const USAGE: &str = "Usage: uintcoll-cli [--width=<u8|u16|u32|u64>] <vec|list> [values...]";

fn parse_values<T: Element>(args: &[String]) -> Vec<T> {
    args.iter()
        .filter_map(|arg| match arg.parse::<u64>().ok().and_then(T::from_u64) {
            Some(value) => Some(value),
            None => {
                eprintln!("\tSkipping {arg:?}: not a {} value", T::WIDTH);
                None
            }
        })
        .collect()
}

fn run_vector<T: Element>(values: &[T]) -> uintcoll::Result<()> {
    println!("Vector of {}:", T::WIDTH);

    let mut vector = Vector::<T>::new();
    for &value in values {
        vector.push(value)?;
    }
    if let Err(err) = vector.display() {
        eprintln!("\tFailed to display vector! Error: {err:?}");
    }
    println!("length: {}, capacity: {}", vector.len(), vector.capacity());

    println!("Reading index {}:", vector.len());
    if let Err(err) = vector.get_ref(vector.len()) {
        println!("\t{err}");
    }

    vector.destroy();

    Ok(())
}

fn run_list<T: Element>(values: &[T]) -> uintcoll::Result<()> {
    println!("LinkedList of {}:", T::WIDTH);

    let mut list = LinkedList::<T>::new();
    let (front, back) = values.split_at(values.len() / 2);
    for &value in front {
        println!("pushed {value} to the front of the list");
        list.push_front(value);
    }
    for &value in back {
        println!("pushed {value} to the end of the list");
        list.push_back(value);
    }
    if let Err(err) = list.display() {
        eprintln!("\tFailed to display list! Error: {err:?}");
    }

    match list.pop_front() {
        Ok(node) => println!("popped {} off the front of the list", node.into_value()),
        Err(err) => println!("\t{err}"),
    }
    match list.pop_back() {
        Ok(node) => println!("popped {} off the end of the list", node.into_value()),
        Err(err) => println!("\t{err}"),
    }
    println!("{list}");
    println!("final length: {}", list.length());

    list.destroy();

    Ok(())
}

fn run<T: Element>(command: &str, args: &[String]) -> Result<(), String> {
    let values = parse_values::<T>(args);

    let result = match command {
        "vec" => run_vector(&values),
        "list" => run_list(&values),
        _ => return Err(format!("Unknown command: {command:?}\n{USAGE}")),
    };

    result.map_err(|err| format!("{command} failed! Error: {err}"))
}

fn main() -> ExitCode {
    let level = if *CLI_DEBUG {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(err) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Failed to initialize logger! Error: {err}");
    }

    let args = env::args().skip(1).collect::<Vec<_>>();
    let width = match args
        .iter()
        .find_map(|arg| arg.strip_prefix("--width="))
        .map(str::parse::<ElementWidth>)
        .transpose()
    {
        Ok(width) => width.unwrap_or(ElementWidth::U8),
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let positional = args
        .iter()
        .filter(|arg| !arg.starts_with("--"))
        .cloned()
        .collect::<Vec<_>>();
    let Some((command, values)) = positional.split_first() else {
        eprintln!("No arguments were provided!\n{USAGE}");
        return ExitCode::FAILURE;
    };
    log::debug!("Running {command:?} with {width} elements");

    let result = match width {
        ElementWidth::U8 => run::<u8>(command, values),
        ElementWidth::U16 => run::<u16>(command, values),
        ElementWidth::U32 => run::<u32>(command, values),
        ElementWidth::U64 => run::<u64>(command, values),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
