//! This demo sweeps a range of real initial guesses through the solver
//! and plots which root each guess lands on and how many iterations it
//! takes, using the Plotly crate.

use itertools::Itertools;
use laguerre::{
    complex, laguerre, num::Complex, roots::ResultExt, ClosedForm, __testing::guess_line,
};
use plotly::{
    color::NamedColor,
    common::{Marker, MarkerSymbol, Mode},
    Plot, Scatter,
};

fn main() {
    simple_logger::SimpleLogger::new().env().init().unwrap();

    // f(z) = z^3 - z, roots at -1, 0 and 1
    let f = ClosedForm::new(
        |z: Complex<f64>| z.powi(3) - z,
        |z: Complex<f64>| z * z * complex!(3.0) - complex!(1.0),
        |z: Complex<f64>| z * complex!(6.0),
    );

    let (guesses, roots, iterations): (Vec<f64>, Vec<f64>, Vec<usize>) =
        guess_line(-2.0, 2.0, 801)
            .into_iter()
            .filter_map(|x0| {
                // a guess that fails to converge is dropped from the
                // plot, the rest of the sweep is unaffected
                let sol = laguerre(&f, 3, x0, 1E-9, 50).ignore_errors()?;
                Some((x0.re, sol.root.re, sol.iterations))
            })
            .multiunzip();

    plot(&guesses, &roots, "root found", "temp/sweep_roots.svg");
    let iterations = iterations.iter().map(|&i| i as f64).collect_vec();
    plot(
        &guesses,
        &iterations,
        "iterations used",
        "temp/sweep_iterations.svg",
    );
}

/// Scatter one outcome series against the initial guesses using Plotly
fn plot(guesses: &[f64], outcome: &[f64], name: &str, location: &str) {
    let mut plot = Plot::new();
    let trace = Scatter::new(guesses.to_owned(), outcome.to_owned())
        .mode(Mode::Markers)
        .marker(
            Marker::new()
                .symbol(MarkerSymbol::CircleOpen)
                .size(6)
                .color(NamedColor::Blue),
        )
        .name(name);
    plot.add_trace(trace);

    plot.write_image(location, plotly::ImageFormat::SVG, 800, 600, 1.0);
}
