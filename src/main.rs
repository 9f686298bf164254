use last_node::{
    get_last, get_last_checked, get_last_counted, parallel_last, ChainError, DataFirst,
    NextFirst, Node, NodeArena, NUM_THREADS,
};
use log::{error, info};
use std::process;

const DEFAULT_LEN: i32 = 1000;

fn run(len: i32) -> Result<(), ChainError> {
    let head = Node::from_values(0..len);
    let (next_first, nf_head) = NodeArena::<NextFirst>::from_values(0..len);
    let (data_first, df_head) = NodeArena::<DataFirst>::from_values(0..len);

    let (last, steps) = get_last_counted(head.as_deref())?;
    println!("boxed:      last = {} ({} steps)", last, steps);
    println!(
        "next-first: last = {}",
        get_last(next_first.head_cursor(nf_head))?
    );
    println!(
        "data-first: last = {}",
        get_last_checked(data_first.head_cursor(df_head))?
    );

    let results = match parallel_last(head.as_deref(), NUM_THREADS) {
        Ok(results) => results,
        Err(_) => {
            error!("a reader thread panicked");
            process::exit(1);
        }
    };
    for (tid, last) in results.into_iter().enumerate() {
        info!("reader {} saw {}", tid, last?);
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let len = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<i32>() {
            Ok(len) => len,
            Err(e) => {
                eprintln!("invalid chain length {:?}: {}", arg, e);
                process::exit(2);
            }
        },
        None => DEFAULT_LEN,
    };
    info!("building chains of {} nodes", len);

    if let Err(e) = run(len) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
