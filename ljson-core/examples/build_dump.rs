//! Build a document through the tree API and dump it.

use ljson_core::{IndentConfig, Node, Null};

fn main() {
    let node = Node::object([
        ("name", Node::from("cat")),
        ("age", Node::from(5)),
        ("smol", Node::from(true)),
        ("nothing", Node::from(Null)),
        ("tags", Node::array(["indoor", "grumpy"])),
    ]);

    node.at("age").set(8);

    node.dump_to_stdout();
    println!();
    println!("-- two-space indent --");
    node.dump_to_stdout_with(&IndentConfig::new(' ', 2));
    println!();
}
