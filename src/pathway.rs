//! Static career mappings: stream → field → course → job trees, course → jobs,
//! engineering branch → careers, career details and course → colleges.
//!
//! Trees are flattened into node/edge lists for a flowchart widget. Positions and
//! layout are left to the renderer.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub static STREAMS: Lazy<StreamTree> = Lazy::new(|| {
    serde_json::from_str(include_str!("../resources/streams.json"))
        .unwrap_or_else(|e| panic!("bundled stream tree is invalid: {}", e))
});

#[derive(Debug, Clone, Deserialize)]
pub struct Course {
    pub name: String,
    #[serde(default)]
    pub jobs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    pub name: String,
    pub courses: Vec<Course>,
}

/// A stream either branches into fields (Science → Maths, Biology) or lists its
/// courses directly.
#[derive(Debug, Clone, Deserialize)]
pub struct Stream {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub courses: Vec<Course>,
}

#[derive(Debug, Deserialize)]
pub struct StreamTree {
    pub streams: Vec<Stream>,
}

impl StreamTree {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.streams.iter().map(|stream| stream.name.as_str())
    }

    pub fn stream(&self, name: &str) -> Option<&Stream> {
        self.streams.iter().find(|stream| stream.name == name)
    }

    /// Flowchart of one stream, `None` if the stream is unknown.
    pub fn flow_for(&self, name: &str) -> Option<FlowGraph> {
        self.stream(name).map(FlowGraph::from)
    }
}

pub fn flow_for(name: &str) -> Option<FlowGraph> {
    STREAMS.flow_for(name)
}

pub static JOBS: Lazy<JobCatalog> = Lazy::new(|| {
    serde_json::from_str(include_str!("../resources/jobs.json"))
        .unwrap_or_else(|e| panic!("bundled job catalog is invalid: {}", e))
});

pub static CAREERS: Lazy<CareerMap> = Lazy::new(|| {
    serde_json::from_str(include_str!("../resources/careers.json"))
        .unwrap_or_else(|e| panic!("bundled career map is invalid: {}", e))
});

#[derive(Debug, Clone, Deserialize)]
pub struct CourseJobs {
    /// Lowercase, dash-separated key ("computer-engineering")
    pub slug: String,
    pub label: String,
    pub jobs: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct JobCatalog {
    pub courses: Vec<CourseJobs>,
}

impl JobCatalog {
    /// Looks a course up by slug; "Computer Engineering" and "computer-engineering"
    /// find the same entry.
    pub fn course(&self, course: &str) -> Option<&CourseJobs> {
        let slug = slugify(course);
        self.courses.iter().find(|c| c.slug == slug)
    }

    pub fn jobs_flow(&self, course: &str) -> Option<FlowGraph> {
        self.course(course).map(|course| {
            let mut graph = FlowGraph::default();
            let course_id = graph.add(NodeKind::Course, &course.label, None);
            for job in &course.jobs {
                graph.add(NodeKind::Job, job, Some(course_id.as_str()));
            }
            graph
        })
    }
}

fn slugify(course: &str) -> String {
    course
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Branch {
    pub name: String,
    pub careers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerDetail {
    pub name: String,
    pub description: String,
    pub skills: Vec<String>,
    pub average_salary: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollegeList {
    pub course: String,
    pub colleges: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CareerMap {
    pub branches: Vec<Branch>,
    pub careers: Vec<CareerDetail>,
    pub colleges: Vec<CollegeList>,
}

impl CareerMap {
    pub fn branch(&self, name: &str) -> Option<&Branch> {
        self.branches.iter().find(|branch| branch.name == name)
    }

    pub fn branch_flow(&self, name: &str) -> Option<FlowGraph> {
        self.branch(name).map(|branch| {
            let mut graph = FlowGraph::default();
            let branch_id = graph.add(NodeKind::Branch, &branch.name, None);
            for career in &branch.careers {
                graph.add(NodeKind::Job, career, Some(branch_id.as_str()));
            }
            graph
        })
    }

    pub fn career_details(&self, name: &str) -> Option<&CareerDetail> {
        self.careers.iter().find(|career| career.name == name)
    }

    /// Colleges offering `course`; empty when none are listed.
    pub fn colleges_for(&self, course: &str) -> &[String] {
        self.colleges
            .iter()
            .find(|list| list.course == course)
            .map(|list| list.colleges.as_slice())
            .unwrap_or_default()
    }
}

/// Course node with one job node per graduate role.
pub fn jobs_flow(course: &str) -> Option<FlowGraph> {
    JOBS.jobs_flow(course)
}

/// Engineering branch node with one node per career it leads to.
pub fn branch_flow(branch: &str) -> Option<FlowGraph> {
    CAREERS.branch_flow(branch)
}

pub fn career_details(name: &str) -> Option<&'static CareerDetail> {
    CAREERS.career_details(name)
}

pub fn colleges_for(course: &str) -> &'static [String] {
    CAREERS.colleges_for(course)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Stream,
    Field,
    Branch,
    Course,
    Job,
}

impl NodeKind {
    fn prefix(self) -> &'static str {
        match self {
            NodeKind::Stream => "stream",
            NodeKind::Field => "sub",
            NodeKind::Branch => "branch",
            NodeKind::Course => "course",
            NodeKind::Job => "job",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl FlowGraph {
    /// Adds a node, numbered by one counter shared across kinds, and links it to `parent`.
    fn add(&mut self, kind: NodeKind, label: &str, parent: Option<&str>) -> String {
        let id = format!("{}-{}", kind.prefix(), self.nodes.len() + 1);
        if let Some(parent) = parent {
            self.edges.push(FlowEdge {
                id: format!("edge-{}-{}", parent, id),
                source: parent.to_string(),
                target: id.clone(),
            });
        }
        self.nodes.push(FlowNode {
            id: id.clone(),
            label: label.to_string(),
            kind,
        });
        id
    }

    fn add_course(&mut self, course: &Course, parent: &str) {
        let course_id = self.add(NodeKind::Course, &course.name, Some(parent));
        for job in &course.jobs {
            self.add(NodeKind::Job, job, Some(course_id.as_str()));
        }
    }
}

impl From<&Stream> for FlowGraph {
    fn from(stream: &Stream) -> Self {
        let mut graph = FlowGraph::default();
        let stream_id = graph.add(NodeKind::Stream, &stream.name, None);
        for field in &stream.fields {
            let field_id = graph.add(NodeKind::Field, &field.name, Some(stream_id.as_str()));
            for course in &field.courses {
                graph.add_course(course, &field_id);
            }
        }
        for course in &stream.courses {
            graph.add_course(course, &stream_id);
        }
        graph
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(
            STREAMS.names().collect::<Vec<_>>(),
            vec!["Science", "Commerce", "Arts"]
        );
    }

    #[test]
    fn test_flow_for_commerce() {
        let graph = flow_for("Commerce").unwrap();
        let ids = graph.nodes.iter().map(|n| n.id.as_str()).collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec!["stream-1", "course-2", "job-3", "job-4", "course-5", "job-6", "job-7"]
        );
        assert_eq!(graph.edges.len(), graph.nodes.len() - 1);
        assert_eq!(graph.edges[0].id, "edge-stream-1-course-2");
        assert_eq!(graph.edges[1].source, "course-2");
        assert_eq!(graph.edges[1].target, "job-3");
    }

    #[test]
    fn test_flow_for_science_has_fields() {
        let graph = flow_for("Science").unwrap();
        let fields = graph
            .nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Field)
            .map(|n| (n.id.as_str(), n.label.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(fields, vec![("sub-2", "Maths"), ("sub-9", "Biology")]);
        assert_eq!(graph.nodes.len(), 15);
        assert!(graph
            .edges
            .iter()
            .any(|e| e.source == "sub-9" && e.target == "course-10"));
        assert!(graph
            .nodes
            .iter()
            .any(|n| n.kind == NodeKind::Job && n.label == "Dental Surgeon"));
    }

    #[test]
    fn test_flow_for_unknown() {
        assert!(flow_for("Vocational").is_none());
    }

    #[test]
    fn test_edges_reference_nodes() {
        for name in STREAMS.names() {
            let graph = flow_for(name).unwrap();
            for edge in &graph.edges {
                assert!(graph.nodes.iter().any(|n| n.id == edge.source));
                assert!(graph.nodes.iter().any(|n| n.id == edge.target));
            }
        }
    }

    #[test]
    fn test_jobs_flow() {
        let graph = jobs_flow("Computer Engineering").unwrap();
        assert_eq!(graph.nodes[0].id, "course-1");
        assert_eq!(graph.nodes[0].label, "Computer Engineering");
        assert_eq!(graph.nodes.len(), 6);
        assert_eq!(graph.edges.len(), 5);
        assert_eq!(graph.edges[0].id, "edge-course-1-job-2");
        assert!(graph.edges.iter().all(|e| e.source == "course-1"));
        assert_eq!(jobs_flow("computer-engineering"), Some(graph));
    }

    #[test]
    fn test_jobs_flow_unknown_course() {
        assert!(jobs_flow("Astrology").is_none());
        assert_eq!(JOBS.courses.len(), 19);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("  Ancient   History "), "ancient-history");
        assert_eq!(slugify("botany"), "botany");
    }

    #[test]
    fn test_branch_flow() {
        let graph = branch_flow("Civil Engineering").unwrap();
        assert_eq!(graph.nodes[0].kind, NodeKind::Branch);
        assert_eq!(graph.nodes[0].id, "branch-1");
        let careers = graph
            .nodes
            .iter()
            .skip(1)
            .map(|n| n.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            careers,
            vec![
                "Structural Engineer",
                "Construction Manager",
                "Urban Planner",
                "Site Engineer"
            ]
        );
        assert!(branch_flow("Marine Engineering").is_none());
    }

    #[test]
    fn test_career_details() {
        let detail = career_details("Data Scientist").unwrap();
        assert!(detail.skills.iter().any(|skill| skill == "Machine Learning"));
        assert_eq!(detail.average_salary, "₹7-15 LPA");
        assert!(career_details("Astronaut").is_none());
    }

    #[test]
    fn test_every_branch_career_is_a_node() {
        for branch in &CAREERS.branches {
            let graph = branch_flow(&branch.name).unwrap();
            assert_eq!(graph.nodes.len(), branch.careers.len() + 1);
        }
    }

    #[test]
    fn test_colleges_for() {
        assert_eq!(
            colleges_for("Medicine"),
            ["Sher-i-Kashmir Institute of Medical Sciences", "GMC Srinagar"]
        );
        assert!(colleges_for("Astrology").is_empty());
    }
}
