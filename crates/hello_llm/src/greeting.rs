//! Static greeting printed after the model reply

/// The literal greeting line
pub const HELLO_WORLD: &str = "Hello World";

/// Print the greeting to stdout
pub fn hello_world() {
    println!("{}", HELLO_WORLD);
}
