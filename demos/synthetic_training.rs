use anyhow::{Context, Result};
use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use logreg_toolkit::config::HyperParams;
use logreg_toolkit::models::logistic::predict_labels;
use logreg_toolkit::preprocessing::{fit_range_scaler, transform_all};
use logreg_toolkit::report::ClassificationReport;

const N_SAMPLES: usize = 400;
const N_STEPS: usize = 2000;

/// Two gaussian-ish blobs on raw, unscaled features. Column 0 is the bias.
fn make_blobs(rng: &mut StdRng, n: usize) -> (Array2<f64>, Array1<f64>) {
    let mut x = Array2::<f64>::ones((n, 3));
    let mut y = Array1::<f64>::zeros(n);
    for i in 0..n {
        let label = i % 2;
        let (cx, cy) = if label == 1 { (60.0, 2.5) } else { (40.0, 1.0) };
        x[(i, 1)] = cx + rng.gen_range(-12.0..12.0);
        x[(i, 2)] = cy + rng.gen_range(-1.0..1.0);
        y[i] = label as f64;
    }
    (x, y)
}

fn main() -> Result<()> {
    env_logger::init();

    let params = match std::env::args().nth(1) {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path))?;
            HyperParams::from_json(&content)?
        }
        None => HyperParams::new(0.1, 0.01, 0.5),
    };
    println!("Hyper-parameters: {:?}", params);

    let mut rng = StdRng::seed_from_u64(2017);
    let (x, y) = make_blobs(&mut rng, N_SAMPLES);

    // First 3/4 for training, the rest held out
    let split = N_SAMPLES * 3 / 4;
    let (x_train, x_test) = x.view().split_at(Axis(0), split);
    let (y_train, y_test) = y.view().split_at(Axis(0), split);

    let scaler = fit_range_scaler(&x_train)?;
    let x_train = transform_all(&x_train, &scaler)?;
    let x_test = transform_all(&x_test, &scaler)?;
    println!("Training X shape: {:?}, held-out X shape: {:?}", x_train.shape(), x_test.shape());

    let mut w = Array1::<f64>::zeros(x_train.ncols());
    for step in 0..N_STEPS {
        if step % 200 == 0 {
            log::info!("step {:>5}: cost = {:.6}", step, params.cost(&w, &x_train, &y_train)?);
        }
        w = params.gradient_step(&w, &x_train, &y_train)?;
    }
    println!("Final cost: {:.6}", params.cost(&w, &x_train, &y_train)?);
    println!("Weights: {}", w);

    let actual = y_test.mapv(|v| v as u8);
    let predicted = predict_labels(&w, &x_test, 0.5)?;
    let report = ClassificationReport::from_labels(&actual, &predicted)?;
    println!("{}", report);
    println!("tpr: {:.4}", report.tpr());

    Ok(())
}
