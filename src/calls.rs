/// A single recorded invocation of the storage contract
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    GetItem(String),
    /// Key and the value as stored, after coercion
    SetItem(String, String),
    RemoveItem(String),
    Clear,
    Key(usize),
}

/// The kind of a [`Call`], without its arguments
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    GetItem,
    SetItem,
    RemoveItem,
    Clear,
    Key,
}

impl Call {
    pub fn op(&self) -> Op {
        match self {
            Self::GetItem(_) => Op::GetItem,
            Self::SetItem(_, _) => Op::SetItem,
            Self::RemoveItem(_) => Op::RemoveItem,
            Self::Clear => Op::Clear,
            Self::Key(_) => Op::Key,
        }
    }
}

/// Ordered log of every call made against a store.
///
/// Recording is pure observation: nothing in here feeds back into the
/// values a store returns.
#[derive(Clone, Debug, Default)]
pub struct CallLog {
    calls: Vec<Call>,
}

impl CallLog {
    pub fn record(&mut self, call: Call) {
        log::trace!("{:?}", call);
        self.calls.push(call);
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Call> {
        self.calls.iter()
    }

    /// Calls of a single kind, in the order they were made
    pub fn filter(&self, op: Op) -> impl Iterator<Item = &Call> {
        self.calls.iter().filter(move |call| call.op() == op)
    }

    pub fn count(&self, op: Op) -> usize {
        self.filter(op).count()
    }
}
