use tracing::{debug, trace};

use crate::{
    common::{ColorMap, VertexMap, VisitSet},
    core::{id::VertexType, Color, Graph, Successors},
};

use super::{
    raw::{Stack, TraversalCollection},
    DfsEvent,
};

/// Whether a single-source depth-first run continues the numbering of the
/// previous runs or starts from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimerMode {
    /// Set the time to zero before the run.
    #[default]
    Reset,

    /// Keep the time where the previous run left it.
    Continue,
}

/// A vertex being explored together with the cursor over its successors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<T> {
    vertex: T,
    successors: Successors<T>,
}

impl<T> Frame<T> {
    pub fn vertex(&self) -> &T {
        &self.vertex
    }

    /// The successors of the vertex, positioned after the last one examined.
    pub fn successors(&self) -> &Successors<T> {
        &self.successors
    }
}

/// Depth-first search computing discovery and finish times.
///
/// Time is a counter owned by the engine. Every discovery and every finish
/// increments it and stamps the vertex with the new value, so the first
/// discovered vertex gets time 1. For any two vertices of the same run, the
/// intervals between their discovery and finish times are either nested or
/// disjoint.
///
/// The traversal is iterative. The engine keeps an explicit stack of
/// [frames](Frame), each holding a vertex and a resumable cursor over its
/// successors. When a finished vertex is popped, the frame below continues
/// with the next successor of its own vertex.
///
/// # Examples
///
/// ```
/// use stopa::{core::Graph, visit::{Dfs, TimerMode}};
///
/// let mut graph = Graph::new();
/// graph.extend_with_vertices(["a", "b", "c", "d"]);
/// graph.extend_with_edges([("a", "b"), ("a", "c"), ("d", "a")]);
///
/// let mut dfs = Dfs::new(&graph);
/// dfs.run_from("a", TimerMode::Reset);
///
/// assert_eq!((dfs.discovered_at(&"b"), dfs.finished_at(&"b")), (2, 3));
/// assert_eq!((dfs.discovered_at(&"c"), dfs.finished_at(&"c")), (4, 5));
///
/// // Continue with another tree without restarting the numbering.
/// dfs.run_from("d", TimerMode::Continue);
/// assert_eq!((dfs.discovered_at(&"d"), dfs.finished_at(&"d")), (7, 8));
/// ```
pub struct Dfs<'g, T: VertexType> {
    graph: &'g Graph<T>,
    time: usize,
    // Time before the root of the current traversal was discovered.
    origin: usize,
    discovered: VertexMap<T, usize>,
    finished: VertexMap<T, usize>,
    color: ColorMap<T>,
    stack: Stack<Frame<T>>,
}

impl<'g, T: VertexType> Dfs<'g, T> {
    pub fn new(graph: &'g Graph<T>) -> Self {
        Self {
            graph,
            time: 0,
            origin: 0,
            discovered: VertexMap::new(),
            finished: VertexMap::new(),
            color: ColorMap::new(),
            stack: Stack::default(),
        }
    }

    /// Traverses the whole graph with a single continuous numbering, starting
    /// a new tree from every vertex that is still white, in the natural order
    /// of vertices.
    pub fn run(&mut self) -> &mut Self {
        let graph = self.graph;
        debug!(vertices = graph.vertex_count(), "depth-first search of the whole graph");

        self.abandon();
        self.time = 0;

        for vertex in graph.vertices() {
            if self.color.get(vertex).is_white() {
                self.run_from(vertex.clone(), TimerMode::Continue);
            }
        }

        debug!(time = self.time, "depth-first search finished");
        self
    }

    /// Traverses everything reachable from `start`.
    ///
    /// The start is always stamped as discovered, even if a previous run on
    /// this engine already finished it. Other vertices colored by previous runs
    /// are not entered again.
    pub fn run_from(&mut self, start: T, timer: TimerMode) -> &mut Self {
        self.start(start, timer);
        while self.step().is_some() {}
        self
    }

    /// Discovers `start` and prepares the traversal from it without going any
    /// further. Drive the traversal with [`step`](Dfs::step).
    ///
    /// An unfinished traversal is abandoned first: its vertices become white
    /// again, lose their timestamps and the time returns to where it was
    /// before that traversal started. The same happens at the beginning of
    /// [`run`](Dfs::run).
    pub fn start(&mut self, start: T, timer: TimerMode) -> DfsEvent<T> {
        debug!(start = ?start, timer = ?timer, "depth-first search");

        self.abandon();

        if timer == TimerMode::Reset {
            self.time = 0;
        }

        self.origin = self.time;

        let time = self.discover(start.clone());
        let successors = self.graph.successors(&start);
        self.stack.push(Frame {
            vertex: start.clone(),
            successors,
        });

        DfsEvent::Discover {
            vertex: start,
            time,
        }
    }

    /// Advances the traversal to the next discovery or finish. Returns `None`
    /// when the traversal is complete.
    pub fn step(&mut self) -> Option<DfsEvent<T>> {
        loop {
            let frame = self.stack.top_mut()?;

            match frame.successors.next() {
                Some(next) => {
                    // Non-white successors are skipped, the cursor already
                    // moved past them.
                    if self.color.get(&next).is_white() {
                        let time = self.discover(next.clone());
                        let successors = self.graph.successors(&next);
                        self.stack.push(Frame {
                            vertex: next.clone(),
                            successors,
                        });

                        return Some(DfsEvent::Discover { vertex: next, time });
                    }
                }
                None => {
                    let frame = self.stack.pop()?;
                    let time = self.finish(frame.vertex.clone());

                    return Some(DfsEvent::Finish {
                        vertex: frame.vertex,
                        time,
                    });
                }
            }
        }
    }

    // Vertices on the stack are exactly the gray vertices of the unfinished
    // traversal.
    fn abandon(&mut self) {
        if self.stack.is_empty() {
            return;
        }

        debug!(pending = self.stack.len(), "abandoning unfinished depth-first search");

        while let Some(frame) = self.stack.pop() {
            self.discovered.remove(&frame.vertex);
            self.finished.remove(&frame.vertex);
            self.color.set(frame.vertex, Color::White);
        }

        self.time = self.origin;
    }

    fn discover(&mut self, vertex: T) -> usize {
        self.time += 1;
        trace!(vertex = ?vertex, time = self.time, "discovered");

        self.discovered.set(vertex.clone(), self.time);
        self.color.set(vertex, Color::Gray);
        self.time
    }

    fn finish(&mut self, vertex: T) -> usize {
        self.time += 1;
        trace!(vertex = ?vertex, time = self.time, "finished");

        self.finished.set(vertex.clone(), self.time);
        self.color.set(vertex, Color::Black);
        self.time
    }

    /// Discovery time of the vertex, zero if it was not discovered.
    pub fn discovered_at(&self, vertex: &T) -> usize {
        self.discovered.get_or(vertex, 0)
    }

    /// Finish time of the vertex, zero if it was not finished.
    pub fn finished_at(&self, vertex: &T) -> usize {
        self.finished.get_or(vertex, 0)
    }

    pub fn color_of(&self, vertex: &T) -> Color {
        self.color.get(vertex)
    }

    /// The last time stamped.
    pub fn time(&self) -> usize {
        self.time
    }

    /// Frames of the unfinished traversal, the bottom of the stack first.
    pub fn stack(&self) -> &[Frame<T>] {
        self.stack.as_slice()
    }

    pub fn is_done(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn discovery_times(&self) -> &VertexMap<T, usize> {
        &self.discovered
    }

    pub fn finish_times(&self) -> &VertexMap<T, usize> {
        &self.finished
    }

    pub fn colors(&self) -> &ColorMap<T> {
        &self.color
    }

    /// Vertices discovered by any run on this engine.
    pub fn visited(&self) -> &impl VisitSet<T> {
        &self.color
    }

    /// Forgets the results of all previous runs, including the time.
    pub fn reset(&mut self) {
        self.time = 0;
        self.origin = 0;
        self.discovered.clear();
        self.finished.clear();
        self.color.clear();
        self.stack.clear();
    }
}
