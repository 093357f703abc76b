//! # Training a small MLP
//!
//! Fits a 3-input `[4, 4, 1]` tanh network to four labelled points with plain SGD,
//! then writes the graph of one prediction as graphviz to `prediction.dot`.
//!
//! ## Running
//! `RUST_LOG=debug cargo run --example train_mlp`

use scalargrad_core::nn::{Mlp, Module, MseLoss, Reduction, UniformInit};
use scalargrad_core::optim::{Optimizer, Sgd};
use scalargrad_core::{GradError, Graph};
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut graph = Graph::new();
    let mlp = Mlp::new(&graph, 3, &[4, 4, 1], &UniformInit::default())?;
    println!("{} ({} parameters)", mlp, mlp.num_parameters());

    // Everything created after this point is per-step scratch.
    let params_only = graph.checkpoint();
    let mut optimizer = Sgd::new(mlp.parameters(), 0.1)?;
    let loss_fn = MseLoss::new(Reduction::Sum);

    let num_steps = 100;
    for step in 0..num_steps {
        let preds = xs
            .iter()
            .map(|x| mlp.forward_scalars(&graph, x).map(|out| out[0]))
            .collect::<Result<Vec<_>, GradError>>()?;
        let loss = loss_fn.calculate(&preds, &ys)?;

        optimizer.zero_grad(&graph)?;
        loss.backward()?;
        optimizer.step(&graph)?;

        if step % 10 == 0 || step == num_steps - 1 {
            println!("Step [{}/{}], Loss: {:.6}", step + 1, num_steps, loss.value());
        }
        graph.rewind(params_only)?;
    }

    println!("\nPredictions:");
    for (x, y) in xs.iter().zip(ys) {
        let pred = mlp.forward_scalars(&graph, x)?[0];
        println!("  {:?} -> {:+.4} (target {:+})", x, pred.value(), y);
    }

    let pred = mlp.forward_scalars(&graph, &xs[0])?[0];
    let mut writer = BufWriter::new(File::create("prediction.dot")?);
    graph.to_dot(pred.id(), &mut writer)?;
    println!("\nWrote the graph of the first prediction to prediction.dot");
    Ok(())
}
