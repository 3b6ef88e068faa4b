//! Prints the core operations of both structures applied to small samples.
//!
//! Run with `cargo run --bin demo`.

use catafold::persistent::{BinaryTree, ConsList};

fn main() {
    let numbers: ConsList<i32> = (1..=5).collect();
    println!("numbers            = {numbers}");
    println!("sum                = {}", numbers.sum());
    println!("length             = {}", numbers.len());
    println!("reverse            = {}", numbers.reverse());
    println!("init               = {}", numbers.init());
    println!(
        "drop_while(< 4)    = {}",
        numbers.drop_while(|element| *element < 4)
    );
    println!(
        "filter(even)       = {}",
        numbers.filter(|element| element % 2 == 0)
    );
    println!("map(* 10)          = {}", numbers.map(|element| element * 10));
    println!(
        "flat_map(n, -n)    = {}",
        numbers.flat_map(|element| ConsList::from_slice(&[*element, -element]))
    );

    let tens = ConsList::from_slice(&[10, 20]);
    println!(
        "zip_with(+) {tens}   = {}",
        numbers.zip_with(&tens, |left, right| left + right)
    );

    let measurements = ConsList::from_slice(&[1.5, 2.0, 4.0]);
    println!("product {measurements} = {}", measurements.product());

    println!();

    let tree = BinaryTree::branch(
        BinaryTree::branch(
            BinaryTree::branch(
                BinaryTree::leaf(2),
                BinaryTree::branch(BinaryTree::leaf(4), BinaryTree::leaf(12)),
            ),
            BinaryTree::leaf(3),
        ),
        BinaryTree::leaf(9),
    );
    println!("tree               = {tree}");
    println!("size               = {}", tree.size());
    println!("depth              = {}", tree.depth());
    println!("maximum            = {}", tree.maximum());
    println!("map(+ 1)           = {}", tree.map(|value| value + 1));
    println!(
        "leaf sum via fold  = {}",
        tree.fold(|value| *value, |left, right| left + right)
    );
}
