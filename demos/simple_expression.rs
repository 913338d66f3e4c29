use arith_eval::Evaluator;

fn main() {
    pretty_env_logger::init();

    let mut evaluator = Evaluator::new();
    evaluator.register_constant("tau", std::f64::consts::TAU);
    evaluator.register_function("deg", f64::to_radians);

    let expressions = [
        "2 + 2 * 3",
        "sin(pi/2)",
        "sqrt(144)",
        "ln(e^2)",
        "cos(deg(180)) + tau / pi",
        "10 / 0",
        "(2 + 3",
    ];

    for expression in expressions {
        match evaluator.evaluate(expression) {
            Ok(result) => println!("{} = {}", expression, result),
            Err(err) => println!("{}: error: {}", expression, err),
        }
    }
}
