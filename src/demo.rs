//! Builds a small binary search tree from command line values and prints
//! what it looks like.

use bstree::tree::Tree;
use clap::Parser;

#[derive(Parser)]
#[command(name = "bstree-demo")]
#[command(about = "Builds a binary search tree and prints its shape")]
struct Args {
    /// Values inserted into the tree, in order.
    #[arg(long, value_delimiter = ',', default_value = "10,6,18,4,8,15,21")]
    values: Vec<i32>,

    /// One more value to insert after the seed values.
    #[arg(long)]
    extra: Option<i32>,

    /// A value to remove before printing.
    #[arg(long)]
    remove: Option<i32>,
}

fn main() {
    let args = Args::parse();

    let mut tree = Tree::new();
    for value in args.values {
        if let Err(err) = tree.insert(value) {
            eprintln!("skipping {}: {}", value, err);
        }
    }

    if let Some(extra) = args.extra {
        match tree.insert(extra) {
            Ok(()) => println!("inserted {}", extra),
            Err(err) => eprintln!("skipping {}: {}", extra, err),
        }
    }

    if let Some(value) = args.remove {
        tree.remove(&value);
        println!("removed {}", value);
    }

    match (tree.min_value(), tree.max_value()) {
        (Ok(min), Ok(max)) => println!("min {}, max {}", min, max),
        _ => println!("tree is empty"),
    }
    println!("height {}, balanced: {}", tree.height(), tree.is_balanced());
    println!("breadth-first: {:?}", tree.breadth_first());

    print!("in-order:");
    tree.in_order(|value| print!(" {}", value));
    println!();
}
