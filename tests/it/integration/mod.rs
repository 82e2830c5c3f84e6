//! Multi-component workflow tests driving the layer through pointer events.
