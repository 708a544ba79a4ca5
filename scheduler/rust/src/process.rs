use std::fmt;

/// Stable process identifier, assigned at generation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pid(pub u32);

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// Lifecycle of a process inside one engine run.
///
/// `Unarrived -> Eligible -> Running <-> Suspended -> Terminated`. The
/// `Running <-> Suspended` edge is only taken by the preemptive engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Unarrived,
    Eligible,
    Running,
    Suspended,
    Terminated,
}

impl State {
    pub fn can_transition_to(self, next: State) -> bool {
        use State::*;
        matches!(
            (self, next),
            (Unarrived, Eligible)
                | (Eligible, Running)
                | (Running, Suspended)
                | (Suspended, Running)
                | (Running, Terminated)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    id: Pid,
    arrival: u64,
    service: u64,

    state: State,
    remaining: u64,
    turnaround: Option<u64>,
}

impl Process {
    pub fn new(id: Pid, arrival: u64, service: u64) -> Process {
        Process {
            id,
            arrival,
            service,
            state: State::Unarrived,
            remaining: service,
            turnaround: None,
        }
    }

    pub fn id(&self) -> Pid {
        self.id
    }

    pub fn arrival(&self) -> u64 {
        self.arrival
    }

    pub fn service(&self) -> u64 {
        self.service
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn turnaround(&self) -> Option<u64> {
        self.turnaround
    }

    /// True from creation until termination.
    pub fn is_active(&self) -> bool {
        self.state != State::Terminated
    }

    pub fn is_terminated(&self) -> bool {
        self.state == State::Terminated
    }

    /// Time at which the process terminated.
    pub fn completion(&self) -> Option<u64> {
        self.turnaround.map(|tt| self.arrival + tt)
    }

    pub(crate) fn set_state(&mut self, next: State) {
        debug_assert!(
            self.state.can_transition_to(next),
            "{}: illegal transition {:?} -> {:?}",
            self.id,
            self.state,
            next
        );
        self.state = next;
    }

    /// Consumes up to `units` of CPU time and returns how much was used.
    pub(crate) fn consume(&mut self, units: u64) -> u64 {
        debug_assert_eq!(self.state, State::Running);
        let used = units.min(self.remaining);
        self.remaining -= used;
        used
    }

    /// Records termination at time `now` and returns the turnaround.
    pub(crate) fn terminate(&mut self, now: u64) -> u64 {
        debug_assert_eq!(self.remaining, 0);
        debug_assert!(now >= self.arrival + self.service);
        self.set_state(State::Terminated);
        let tt = now - self.arrival;
        self.turnaround = Some(tt);
        tt
    }
}

/// Arena of process records ordered by arrival time.
///
/// Ties in arrival keep generation order. Each engine receives its own
/// clone, so mutations never leak between policies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSet {
    procs: Vec<Process>,
}

impl ProcessSet {
    pub fn from_processes(mut procs: Vec<Process>) -> ProcessSet {
        // stable: equal arrivals stay in generation order
        procs.sort_by_key(|p| p.arrival);
        ProcessSet { procs }
    }

    /// Builds a set from `(arrival, service)` pairs, numbering ids from 1.
    pub fn from_pairs(pairs: &[(u64, u64)]) -> ProcessSet {
        let procs = pairs
            .iter()
            .enumerate()
            .map(|(i, &(arrival, service))| Process::new(Pid(i as u32 + 1), arrival, service))
            .collect();
        ProcessSet::from_processes(procs)
    }

    pub fn len(&self) -> usize {
        self.procs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procs.is_empty()
    }

    /// Process at arrival slot `slot`.
    pub fn get(&self, slot: usize) -> &Process {
        &self.procs[slot]
    }

    pub(crate) fn get_mut(&mut self, slot: usize) -> &mut Process {
        &mut self.procs[slot]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.procs.iter()
    }

    pub fn find(&self, id: Pid) -> Option<&Process> {
        self.procs.iter().find(|p| p.id == id)
    }

    /// Sum of every service time, saturating at `u64::MAX`.
    pub fn total_service(&self) -> u64 {
        self.procs.iter().fold(0, |acc, p| acc.saturating_add(p.service))
    }

    /// Upper bound on any simulated time reached while scheduling this
    /// set: the latest arrival plus all service. `None` if it overflows.
    pub fn checked_horizon(&self) -> Option<u64> {
        let latest = self.procs.last().map_or(0, |p| p.arrival);
        self.procs
            .iter()
            .try_fold(latest, |acc, p| acc.checked_add(p.service))
    }

    pub fn all_terminated(&self) -> bool {
        self.procs.iter().all(Process::is_terminated)
    }
}

impl<'a> IntoIterator for &'a ProcessSet {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.procs.iter()
    }
}
