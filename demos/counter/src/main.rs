use std::rc::Rc;

use repose_container::*;
use repose_core::*;

struct Counter {
    count: i32,
    increment: Rc<dyn Fn()>,
}

fn use_counter_container(initial_count: Option<i32>) -> Counter {
    let count = use_state(|| initial_count.unwrap_or(0));
    Counter {
        count: count.get(),
        increment: {
            let count = count.clone();
            Rc::new(move || count.update(|c| *c += 1))
        },
    }
}

thread_local! {
    static COUNTER: Container<Option<i32>, Counter> =
        Container::named("CounterProvider", use_counter_container);
}

fn use_counter() -> Result<Rc<Counter>, NoProviderError> {
    COUNTER.with(|c| c.use_container())
}

fn counter_provider() -> Provider<Option<i32>, Counter> {
    COUNTER.with(|c| c.provider().clone())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match use_counter() {
        Ok(_) => anyhow::bail!("counter resolved without a provider"),
        Err(e) => log::info!("outside the provider: {e}"),
    }

    let provider = counter_provider();
    let mut app = render_hook_with(
        move |content| provider.provide(Some(7), content),
        use_counter,
    );

    for _ in 0..3 {
        let counter = app.result().clone()?;
        log::info!("count = {}", counter.count);
        app.act(|_| (counter.increment)());
    }

    let counter = app.result().clone()?;
    println!("final count: {}", counter.count);

    app.unmount();
    Ok(())
}
