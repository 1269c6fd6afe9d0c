//! McLain's (1974) two-dimensional surfaces.
//!
//! - S1: part of a sphere
//! - S2: steep hill rising from a plain
//! - S3: less steep hill
//! - S4: long narrow hill
//! - S5: two plateaus separated by a steep cliff

use crate::input_spec::{uniform_marginals, ProbInputSpec};
use crate::traits::{impl_display_via_summary, TestFunction};
use ndarray::{Array1, ArrayView2, Zip};

const AVAILABLE_INPUTS: &[&str] = &["McLain1974"];
const TAGS: &[&str] = &["metamodeling"];

fn mclain_input() -> ProbInputSpec {
    ProbInputSpec::new(
        "McLain1974",
        "Input specification for the McLain's test functions from McLain (1974)",
        uniform_marginals(2, 1.0, 10.0),
    )
}

fn map_pairs<F>(xx: ArrayView2<'_, f64>, f: F) -> Array1<f64>
where
    F: Fn(f64, f64) -> f64,
{
    Zip::from(xx.column(0))
        .and(xx.column(1))
        .map_collect(|&x1, &x2| f(x1, x2))
}

macro_rules! mclain_function {
    ($ty:ident, $name:literal, $description:literal, |$x1:ident, $x2:ident| $formula:expr) => {
        #[doc = $description]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $ty;

        impl $ty {
            /// Create the function with its default input.
            pub fn new() -> Self {
                Self
            }
        }

        impl TestFunction for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn description(&self) -> &'static str {
                $description
            }

            fn tags(&self) -> &'static [&'static str] {
                TAGS
            }

            fn available_inputs(&self) -> &'static [&'static str] {
                AVAILABLE_INPUTS
            }

            fn input_selection(&self) -> &'static str {
                AVAILABLE_INPUTS[0]
            }

            fn input_spec(&self) -> ProbInputSpec {
                mclain_input()
            }

            fn spatial_dimension(&self) -> usize {
                2
            }

            fn compute(&self, xx: ArrayView2<'_, f64>) -> Array1<f64> {
                map_pairs(xx, |$x1, $x2| $formula)
            }
        }

        impl_display_via_summary!($ty);
    };
}

mclain_function!(
    McLainS1,
    "McLainS1",
    "McLain S1 function from McLain (1974)",
    |x1, x2| (64.0 - (x1 - 5.5).powi(2) - (x2 - 5.5).powi(2)).sqrt()
);

mclain_function!(
    McLainS2,
    "McLainS2",
    "McLain S2 function from McLain (1974)",
    |x1, x2| (-((x1 - 5.0).powi(2) + (x2 - 5.0).powi(2))).exp()
);

mclain_function!(
    McLainS3,
    "McLainS3",
    "McLain S3 function from McLain (1974)",
    |x1, x2| (-0.25 * ((x1 - 5.0).powi(2) + (x2 - 5.0).powi(2))).exp()
);

mclain_function!(
    McLainS4,
    "McLainS4",
    "McLain S4 function from McLain (1974)",
    |x1, x2| (-((x1 + x2 - 11.0).powi(2) + (x1 - x2).powi(2) / 10.0)).exp()
);

mclain_function!(
    McLainS5,
    "McLainS5",
    "McLain S5 function from McLain (1974)",
    |x1, x2| (x1 + x2 - 11.0).tanh()
);
