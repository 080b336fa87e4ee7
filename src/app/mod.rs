// Application layer: pipelines wiring domain ports to adapters.

pub mod pipelines;
