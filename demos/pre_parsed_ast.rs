use arith_eval::Evaluator;

fn main() {
    pretty_env_logger::init();

    let mut evaluator = Evaluator::new();

    let ast = evaluator
        .compile("rate * (1 + rate)^years")
        .expect("Failed to parse");
    println!("Tree: {}", ast);

    for years in [1.0, 5.0, 10.0] {
        evaluator.register_constant("rate", 0.05);
        evaluator.register_constant("years", years);
        match evaluator.evaluate_compiled(&ast) {
            Ok(result) => println!("years = {}: {}", years, result),
            Err(err) => println!("Error: {}", err),
        }
    }
}
