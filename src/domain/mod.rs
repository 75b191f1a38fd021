// Domain layer: value types shared by the calculator, the credit guard and the CLI.

pub mod model;
