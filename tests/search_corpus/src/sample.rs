fn main() {
    let greeting = "hello";
    println!("{greeting}");
}

fn helper() -> u32 {
    42
}
