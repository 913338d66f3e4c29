use arith_eval::Evaluator;

fn main() {
    pretty_env_logger::init();

    let evaluator = Evaluator::new();

    let expressions: Vec<String> = (1..=8)
        .map(|i| format!("sqrt({i}) * sin(pi / {i})"))
        .collect();

    let results = evaluator.evaluate_batch(&expressions);
    for (expression, result) in expressions.iter().zip(results) {
        println!("{}: {:?}", expression, result);
    }
}
