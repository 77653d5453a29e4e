// EcoNest Landing Page - Leptos 0.8 Edition

fn main() {
    econest_landing::start();
}
