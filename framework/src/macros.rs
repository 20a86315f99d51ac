#[macro_export]
macro_rules! listener_func {
    ($func:expr $(,)?) => {
        |ctx| Box::pin($func(ctx))
    };
}
