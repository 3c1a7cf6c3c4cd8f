//! Format layer creation macros

/// Builds a plain-text fmt layer (`pretty` or `compact`) from a `DisplayConfig`.
macro_rules! create_fmt_layer {
    ($format:ident, $display:expr) => {{
        tracing_subscriber::fmt::layer()
            .$format()
            .with_writer(std::io::stderr)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
    }};
}

/// Builds a JSON fmt layer from a `DisplayConfig`.
macro_rules! create_json_layer {
    ($display:expr) => {{
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .flatten_event(true)
            .with_ansi(false)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
    }};
}

/// Installs `filter` + `layer` as the global subscriber, dropping the
/// timestamp when `time` is off.
macro_rules! try_install {
    ($filter:expr, $layer:expr, $time:expr) => {{
        let registry = tracing_subscriber::Registry::default().with($filter);
        if $time {
            registry.with($layer).try_init()
        } else {
            registry.with($layer.without_time()).try_init()
        }
    }};
}
