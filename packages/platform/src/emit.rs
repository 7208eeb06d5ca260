use cosmwasm_std::{Env, Event, Timestamp, Uint128};

use finance::percent::Percent;

pub trait Emit
where
    Self: Sized,
{
    fn emit<K, V>(self, event_key: K, event_value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>;

    /// Specialization of [`emit`](Self::emit) for values implementing [`ToString`].
    fn emit_to_string_value<K, V>(self, event_key: K, value: V) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        self.emit(event_key, value.to_string())
    }

    /// Specialization of [`emit`](Self::emit) for [`Timestamp`].
    fn emit_timestamp<K>(self, event_key: K, timestamp: &Timestamp) -> Self
    where
        K: Into<String>,
    {
        self.emit_to_string_value(event_key, timestamp.nanos())
    }

    /// Specialization of [`emit`](Self::emit) for stable-value amounts.
    fn emit_amount<K>(self, event_key: K, amount: Uint128) -> Self
    where
        K: Into<String>,
    {
        self.emit_to_string_value(event_key, amount)
    }

    /// Specialization of [`emit`](Self::emit) for [`Percent`]'s amount in basis points.
    fn emit_percent_amount<K>(self, event_key: K, percent: Percent) -> Self
    where
        K: Into<String>,
    {
        self.emit_to_string_value(event_key, percent.units())
    }

    fn emit_tx_info(self, env: &Env) -> Self {
        self.emit_to_string_value("height", env.block.height)
            .emit_timestamp("at", &env.block.time)
    }
}

pub struct Emitter {
    event: Event,
}

impl Emitter {
    pub fn of_type<T>(event_type: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            event: Event::new(event_type),
        }
    }
}

impl Emit for Emitter {
    fn emit<K, V>(mut self, event_key: K, event_value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.event = self.event.add_attribute(event_key, event_value);
        self
    }
}

impl From<Emitter> for Event {
    fn from(emitter: Emitter) -> Self {
        emitter.event
    }
}
