//! The built-in phase dataset.

use crate::model::{Artifact, ArtifactKind, Deliverable, Phase, Step};

/// Every phase of the cycle in canonical order.
///
/// The ring phases come first, preliminary through H; requirements management
/// is last and sits at the hub of the wheel.
pub(super) static PHASES: &[Phase] = &[
    Phase {
        id: "preliminary",
        code: "P",
        name: "Preliminary",
        full_name: "Preliminary Phase",
        description: "Prepare the organization for successful TOGAF architecture projects. Define the architecture capability, principles, and governance framework.",
        objectives: &[
            "Define the enterprise scope",
            "Confirm governance and support frameworks",
            "Define and establish the Architecture Team",
            "Identify and establish Architecture Principles",
            "Tailor the TOGAF framework",
            "Implement architecture tools",
        ],
        inputs: &[
            "TOGAF Library",
            "Other architecture frameworks",
            "Board strategies, business plans",
            "IT strategy, business principles",
            "Governance and legal frameworks",
        ],
        outputs: &[
            "Organizational Model for Enterprise Architecture",
            "Tailored Architecture Framework",
            "Initial Architecture Repository",
            "Architecture Principles",
            "Request for Architecture Work (draft)",
        ],
        steps: &[
            Step {
                id: "p1",
                name: "Scope the enterprise",
                description: "Define which parts of the enterprise will be covered by the architecture effort",
                tips: &[],
            },
            Step {
                id: "p2",
                name: "Confirm governance frameworks",
                description: "Establish architecture governance structure and processes",
                tips: &[],
            },
            Step {
                id: "p3",
                name: "Define architecture team",
                description: "Set up the team structure, roles, and responsibilities",
                tips: &[],
            },
            Step {
                id: "p4",
                name: "Identify architecture principles",
                description: "Define the guiding principles that will shape architecture decisions",
                tips: &[],
            },
            Step {
                id: "p5",
                name: "Tailor TOGAF",
                description: "Adapt TOGAF to your organization's specific needs",
                tips: &[],
            },
            Step {
                id: "p6",
                name: "Implement tools",
                description: "Set up architecture tools and repositories",
                tips: &[],
            },
        ],
        deliverables: &[
            Deliverable {
                id: "p-d1",
                name: "Organizational Model for EA",
                description: "Defines scope, maturity, roles, responsibilities, constraints, budget",
                required: true,
            },
            Deliverable {
                id: "p-d2",
                name: "Tailored Architecture Framework",
                description: "Customized TOGAF for the organization",
                required: true,
            },
            Deliverable {
                id: "p-d3",
                name: "Architecture Principles",
                description: "Foundational rules governing architecture work",
                required: true,
            },
            Deliverable {
                id: "p-d4",
                name: "Architecture Repository",
                description: "Initial structure for storing architecture artifacts",
                required: true,
            },
        ],
        artifacts: &[
            Artifact {
                id: "p-a1",
                name: "Principles Catalog",
                kind: ArtifactKind::Catalog,
                description: "List of architecture principles with rationale and implications",
            },
        ],
        key_questions: &[
            "What is the scope of the architecture effort?",
            "Who are the key stakeholders?",
            "What governance framework will be used?",
            "What principles will guide the architecture?",
            "How will TOGAF be tailored for this organization?",
        ],
        stakeholder_focus: &["Executive Sponsors", "Architecture Board", "CIO/CTO"],
        tips: &[
            "Don't skip this phase - poor preparation leads to project failure",
            "Get executive buy-in early",
            "Define clear scope boundaries",
            "Establish architecture principles that align with business goals",
        ],
    },
    Phase {
        id: "phase-a",
        code: "A",
        name: "Architecture Vision",
        full_name: "Phase A: Architecture Vision",
        description: "Develop a high-level vision of the capabilities and business value to be delivered. Obtain approval for a Statement of Architecture Work.",
        objectives: &[
            "Develop high-level aspirational vision",
            "Obtain approval for Statement of Architecture Work",
            "Identify stakeholders and their concerns",
            "Create the Architecture Vision",
            "Validate business principles, goals, and drivers",
            "Define scope and constraints",
        ],
        inputs: &[
            "Request for Architecture Work",
            "Business principles, goals, and drivers",
            "Organizational Model for EA",
            "Tailored Architecture Framework",
            "Architecture Repository",
        ],
        outputs: &[
            "Approved Statement of Architecture Work",
            "Refined statements of business principles, goals, and drivers",
            "Architecture Vision",
            "Draft Architecture Definition Document",
            "Communications Plan",
            "Architecture Project Plan",
        ],
        steps: &[
            Step {
                id: "a1",
                name: "Establish architecture project",
                description: "Set up the project, team, and initial planning",
                tips: &[],
            },
            Step {
                id: "a2",
                name: "Identify stakeholders and concerns",
                description: "Map all stakeholders and understand their needs",
                tips: &[
                    "Use a stakeholder map",
                    "Consider both internal and external stakeholders",
                ],
            },
            Step {
                id: "a3",
                name: "Confirm business goals and drivers",
                description: "Validate the business context for the architecture",
                tips: &[],
            },
            Step {
                id: "a4",
                name: "Evaluate business capabilities",
                description: "Assess current capabilities against desired state",
                tips: &[],
            },
            Step {
                id: "a5",
                name: "Assess readiness for transformation",
                description: "Evaluate the organization's ability to change",
                tips: &[],
            },
            Step {
                id: "a6",
                name: "Define scope",
                description: "Set clear boundaries for the architecture effort",
                tips: &[],
            },
            Step {
                id: "a7",
                name: "Confirm architecture principles",
                description: "Validate and refine principles from Preliminary Phase",
                tips: &[],
            },
            Step {
                id: "a8",
                name: "Develop Architecture Vision",
                description: "Create the high-level vision document",
                tips: &[],
            },
            Step {
                id: "a9",
                name: "Define target architecture value",
                description: "Articulate the business value proposition",
                tips: &[],
            },
            Step {
                id: "a10",
                name: "Identify risks and mitigation",
                description: "Assess transformation risks",
                tips: &[],
            },
            Step {
                id: "a11",
                name: "Develop Statement of Architecture Work",
                description: "Formal agreement to proceed with architecture",
                tips: &[],
            },
        ],
        deliverables: &[
            Deliverable {
                id: "a-d1",
                name: "Statement of Architecture Work",
                description: "Defines scope, approach, and agreement to proceed",
                required: true,
            },
            Deliverable {
                id: "a-d2",
                name: "Architecture Vision",
                description: "High-level summary of changes and business value",
                required: true,
            },
            Deliverable {
                id: "a-d3",
                name: "Communications Plan",
                description: "How architecture will be communicated to stakeholders",
                required: false,
            },
            Deliverable {
                id: "a-d4",
                name: "Architecture Definition Document (draft)",
                description: "Initial outline of the architecture",
                required: false,
            },
        ],
        artifacts: &[
            Artifact {
                id: "a-a1",
                name: "Stakeholder Map Matrix",
                kind: ArtifactKind::Matrix,
                description: "Maps stakeholders to their concerns and influence",
            },
            Artifact {
                id: "a-a2",
                name: "Value Chain Diagram",
                kind: ArtifactKind::Diagram,
                description: "Shows key business activities and dependencies",
            },
            Artifact {
                id: "a-a3",
                name: "Solution Concept Diagram",
                kind: ArtifactKind::Diagram,
                description: "High-level view of the proposed solution",
            },
        ],
        key_questions: &[
            "What is the business problem we're solving?",
            "Who are the stakeholders and what do they need?",
            "What is the scope of this architecture effort?",
            "What value will this deliver?",
            "What are the key risks?",
        ],
        stakeholder_focus: &[
            "Business Executives",
            "Project Sponsors",
            "Business Users",
            "Architecture Board",
        ],
        tips: &[
            "This phase is about getting buy-in and approval",
            "Focus on business value, not technical details",
            "The Architecture Vision should fit on one page",
            "Don't go too deep - save detail for later phases",
        ],
    },
    Phase {
        id: "phase-b",
        code: "B",
        name: "Business Architecture",
        full_name: "Phase B: Business Architecture",
        description: "Develop the Target Business Architecture that describes how the enterprise needs to operate to achieve business goals.",
        objectives: &[
            "Develop Baseline Business Architecture (if not existing)",
            "Develop Target Business Architecture",
            "Perform gap analysis",
            "Define roadmap components",
            "Resolve impacts across the Architecture Landscape",
        ],
        inputs: &[
            "Request for Architecture Work",
            "Architecture Vision",
            "Architecture Repository",
            "Business principles, goals, and drivers",
            "Capability assessments",
        ],
        outputs: &[
            "Refined Architecture Vision",
            "Draft Architecture Definition Document (Business)",
            "Draft Architecture Requirements Specification",
            "Business Architecture components of Architecture Roadmap",
        ],
        steps: &[
            Step {
                id: "b1",
                name: "Select reference models and tools",
                description: "Choose appropriate frameworks and viewpoints",
                tips: &[],
            },
            Step {
                id: "b2",
                name: "Develop Baseline Business Architecture",
                description: "Document current state if not already done",
                tips: &[],
            },
            Step {
                id: "b3",
                name: "Develop Target Business Architecture",
                description: "Define the desired future state",
                tips: &[],
            },
            Step {
                id: "b4",
                name: "Perform gap analysis",
                description: "Identify differences between baseline and target",
                tips: &[],
            },
            Step {
                id: "b5",
                name: "Define roadmap components",
                description: "Identify work packages needed to close gaps",
                tips: &[],
            },
            Step {
                id: "b6",
                name: "Resolve impacts",
                description: "Assess impacts on other architecture domains",
                tips: &[],
            },
            Step {
                id: "b7",
                name: "Conduct stakeholder review",
                description: "Validate with stakeholders",
                tips: &[],
            },
            Step {
                id: "b8",
                name: "Finalize Business Architecture",
                description: "Complete documentation and get approval",
                tips: &[],
            },
            Step {
                id: "b9",
                name: "Create Architecture Definition Document",
                description: "Document the business architecture",
                tips: &[],
            },
        ],
        deliverables: &[
            Deliverable {
                id: "b-d1",
                name: "Architecture Definition Document (Business)",
                description: "Baseline and target business architecture",
                required: true,
            },
            Deliverable {
                id: "b-d2",
                name: "Architecture Requirements Specification (Business)",
                description: "Business requirements for the architecture",
                required: true,
            },
        ],
        artifacts: &[
            Artifact {
                id: "b-a1",
                name: "Organization/Actor Catalog",
                kind: ArtifactKind::Catalog,
                description: "List of organizational units and actors",
            },
            Artifact {
                id: "b-a2",
                name: "Driver/Goal/Objective Catalog",
                kind: ArtifactKind::Catalog,
                description: "Business drivers and goals",
            },
            Artifact {
                id: "b-a3",
                name: "Role Catalog",
                kind: ArtifactKind::Catalog,
                description: "Business roles and responsibilities",
            },
            Artifact {
                id: "b-a4",
                name: "Business Service/Function Catalog",
                kind: ArtifactKind::Catalog,
                description: "Business services and functions",
            },
            Artifact {
                id: "b-a5",
                name: "Location Catalog",
                kind: ArtifactKind::Catalog,
                description: "Business locations",
            },
            Artifact {
                id: "b-a6",
                name: "Process/Event/Control/Product Catalog",
                kind: ArtifactKind::Catalog,
                description: "Business processes and events",
            },
            Artifact {
                id: "b-a7",
                name: "Contract/Measure Catalog",
                kind: ArtifactKind::Catalog,
                description: "Business contracts and KPIs",
            },
            Artifact {
                id: "b-a8",
                name: "Business Interaction Matrix",
                kind: ArtifactKind::Matrix,
                description: "Interactions between business units",
            },
            Artifact {
                id: "b-a9",
                name: "Actor/Role Matrix",
                kind: ArtifactKind::Matrix,
                description: "Mapping of actors to roles",
            },
            Artifact {
                id: "b-a10",
                name: "Business Footprint Diagram",
                kind: ArtifactKind::Diagram,
                description: "Business goals mapped to organizational units",
            },
            Artifact {
                id: "b-a11",
                name: "Business Service/Information Diagram",
                kind: ArtifactKind::Diagram,
                description: "Information flow between services",
            },
            Artifact {
                id: "b-a12",
                name: "Functional Decomposition Diagram",
                kind: ArtifactKind::Diagram,
                description: "Breakdown of business functions",
            },
            Artifact {
                id: "b-a13",
                name: "Product Lifecycle Diagram",
                kind: ArtifactKind::Diagram,
                description: "Product lifecycle stages",
            },
            Artifact {
                id: "b-a14",
                name: "Goal/Objective/Service Diagram",
                kind: ArtifactKind::Diagram,
                description: "Mapping goals to services",
            },
            Artifact {
                id: "b-a15",
                name: "Business Use-Case Diagram",
                kind: ArtifactKind::Diagram,
                description: "Business use cases",
            },
            Artifact {
                id: "b-a16",
                name: "Organization Decomposition Diagram",
                kind: ArtifactKind::Diagram,
                description: "Organizational structure",
            },
            Artifact {
                id: "b-a17",
                name: "Process Flow Diagram",
                kind: ArtifactKind::Diagram,
                description: "Business process flows",
            },
            Artifact {
                id: "b-a18",
                name: "Event Diagram",
                kind: ArtifactKind::Diagram,
                description: "Business events and triggers",
            },
        ],
        key_questions: &[
            "What business capabilities are needed?",
            "What processes need to change?",
            "What organizational changes are required?",
            "What are the key business services?",
            "What information flows between business units?",
        ],
        stakeholder_focus: &[
            "Business Process Owners",
            "Business Analysts",
            "Operations Managers",
            "Business Architects",
        ],
        tips: &[
            "Start with business capabilities, not org structure",
            "Focus on what the business does, not how IT supports it",
            "Use business language, not technical jargon",
            "Don't try to model everything - focus on scope",
        ],
    },
    Phase {
        id: "phase-c-is",
        code: "C-IS",
        name: "Information Systems (Data)",
        full_name: "Phase C: Information Systems Architecture - Data Architecture",
        description: "Develop the Target Data Architecture that describes the structure of the organization's logical and physical data assets.",
        objectives: &[
            "Develop Baseline Data Architecture",
            "Develop Target Data Architecture",
            "Perform gap analysis",
            "Define roadmap components",
            "Ensure data architecture supports business architecture",
        ],
        inputs: &[
            "Request for Architecture Work",
            "Architecture Vision",
            "Architecture Repository",
            "Business Architecture outputs",
            "Data principles",
        ],
        outputs: &[
            "Refined Architecture Vision",
            "Draft Architecture Definition Document (Data)",
            "Draft Architecture Requirements Specification (Data)",
            "Data Architecture components of Architecture Roadmap",
        ],
        steps: &[
            Step {
                id: "c-is1",
                name: "Select reference models and tools",
                description: "Choose data architecture viewpoints and tools",
                tips: &[],
            },
            Step {
                id: "c-is2",
                name: "Develop Baseline Data Architecture",
                description: "Document current data landscape",
                tips: &[],
            },
            Step {
                id: "c-is3",
                name: "Develop Target Data Architecture",
                description: "Design target data structures and flows",
                tips: &[],
            },
            Step {
                id: "c-is4",
                name: "Perform gap analysis",
                description: "Identify data gaps and migration needs",
                tips: &[],
            },
            Step {
                id: "c-is5",
                name: "Define roadmap components",
                description: "Plan data transformation activities",
                tips: &[],
            },
            Step {
                id: "c-is6",
                name: "Resolve impacts",
                description: "Assess impacts on application architecture",
                tips: &[],
            },
            Step {
                id: "c-is7",
                name: "Conduct stakeholder review",
                description: "Validate data architecture with stakeholders",
                tips: &[],
            },
            Step {
                id: "c-is8",
                name: "Finalize Data Architecture",
                description: "Complete and approve data architecture",
                tips: &[],
            },
            Step {
                id: "c-is9",
                name: "Create Architecture Definition Document",
                description: "Document the data architecture",
                tips: &[],
            },
        ],
        deliverables: &[
            Deliverable {
                id: "c-is-d1",
                name: "Architecture Definition Document (Data)",
                description: "Baseline and target data architecture",
                required: true,
            },
            Deliverable {
                id: "c-is-d2",
                name: "Architecture Requirements Specification (Data)",
                description: "Data requirements and constraints",
                required: true,
            },
        ],
        artifacts: &[
            Artifact {
                id: "c-is-a1",
                name: "Data Entity/Data Component Catalog",
                kind: ArtifactKind::Catalog,
                description: "List of data entities and components",
            },
            Artifact {
                id: "c-is-a2",
                name: "Data Entity/Business Function Matrix",
                kind: ArtifactKind::Matrix,
                description: "Data entities mapped to business functions",
            },
            Artifact {
                id: "c-is-a3",
                name: "System/Data Matrix",
                kind: ArtifactKind::Matrix,
                description: "Systems mapped to data they use",
            },
            Artifact {
                id: "c-is-a4",
                name: "Conceptual Data Diagram",
                kind: ArtifactKind::Diagram,
                description: "High-level data model",
            },
            Artifact {
                id: "c-is-a5",
                name: "Logical Data Diagram",
                kind: ArtifactKind::Diagram,
                description: "Detailed logical data model",
            },
            Artifact {
                id: "c-is-a6",
                name: "Data Dissemination Diagram",
                kind: ArtifactKind::Diagram,
                description: "Data flows and distribution",
            },
            Artifact {
                id: "c-is-a7",
                name: "Data Security Diagram",
                kind: ArtifactKind::Diagram,
                description: "Data security zones and controls",
            },
            Artifact {
                id: "c-is-a8",
                name: "Data Migration Diagram",
                kind: ArtifactKind::Diagram,
                description: "Data migration approach",
            },
            Artifact {
                id: "c-is-a9",
                name: "Data Lifecycle Diagram",
                kind: ArtifactKind::Diagram,
                description: "Data lifecycle management",
            },
        ],
        key_questions: &[
            "What are the key data entities?",
            "Where does data originate and flow?",
            "What are the data quality requirements?",
            "What data governance is needed?",
            "How will data be migrated?",
        ],
        stakeholder_focus: &[
            "Data Architects",
            "Data Stewards",
            "Database Administrators",
            "Business Analysts",
        ],
        tips: &[
            "Start with conceptual model before going logical/physical",
            "Identify data owners and stewards early",
            "Consider data quality and governance from the start",
            "Plan for data migration complexity",
        ],
    },
    Phase {
        id: "phase-c-app",
        code: "C-App",
        name: "Information Systems (Application)",
        full_name: "Phase C: Information Systems Architecture - Application Architecture",
        description: "Develop the Target Application Architecture that describes how individual applications are to be deployed and their interactions.",
        objectives: &[
            "Develop Baseline Application Architecture",
            "Develop Target Application Architecture",
            "Perform gap analysis",
            "Define roadmap components",
            "Ensure applications support business and data architectures",
        ],
        inputs: &[
            "Request for Architecture Work",
            "Architecture Vision",
            "Architecture Repository",
            "Business Architecture outputs",
            "Data Architecture outputs",
        ],
        outputs: &[
            "Refined Architecture Vision",
            "Draft Architecture Definition Document (Application)",
            "Draft Architecture Requirements Specification (Application)",
            "Application Architecture components of Architecture Roadmap",
        ],
        steps: &[
            Step {
                id: "c-app1",
                name: "Select reference models and tools",
                description: "Choose application architecture viewpoints",
                tips: &[],
            },
            Step {
                id: "c-app2",
                name: "Develop Baseline Application Architecture",
                description: "Document current application landscape",
                tips: &[],
            },
            Step {
                id: "c-app3",
                name: "Develop Target Application Architecture",
                description: "Design target application portfolio",
                tips: &[],
            },
            Step {
                id: "c-app4",
                name: "Perform gap analysis",
                description: "Identify application changes needed",
                tips: &[],
            },
            Step {
                id: "c-app5",
                name: "Define roadmap components",
                description: "Plan application development/retirement",
                tips: &[],
            },
            Step {
                id: "c-app6",
                name: "Resolve impacts",
                description: "Assess impacts on technology architecture",
                tips: &[],
            },
            Step {
                id: "c-app7",
                name: "Conduct stakeholder review",
                description: "Validate with stakeholders",
                tips: &[],
            },
            Step {
                id: "c-app8",
                name: "Finalize Application Architecture",
                description: "Complete and approve",
                tips: &[],
            },
            Step {
                id: "c-app9",
                name: "Create Architecture Definition Document",
                description: "Document the application architecture",
                tips: &[],
            },
        ],
        deliverables: &[
            Deliverable {
                id: "c-app-d1",
                name: "Architecture Definition Document (Application)",
                description: "Baseline and target application architecture",
                required: true,
            },
            Deliverable {
                id: "c-app-d2",
                name: "Architecture Requirements Specification (Application)",
                description: "Application requirements",
                required: true,
            },
        ],
        artifacts: &[
            Artifact {
                id: "c-app-a1",
                name: "Application Portfolio Catalog",
                kind: ArtifactKind::Catalog,
                description: "List of all applications",
            },
            Artifact {
                id: "c-app-a2",
                name: "Interface Catalog",
                kind: ArtifactKind::Catalog,
                description: "Application interfaces",
            },
            Artifact {
                id: "c-app-a3",
                name: "System/Organization Matrix",
                kind: ArtifactKind::Matrix,
                description: "Applications mapped to org units",
            },
            Artifact {
                id: "c-app-a4",
                name: "Role/System Matrix",
                kind: ArtifactKind::Matrix,
                description: "User roles mapped to applications",
            },
            Artifact {
                id: "c-app-a5",
                name: "System/Function Matrix",
                kind: ArtifactKind::Matrix,
                description: "Applications mapped to functions",
            },
            Artifact {
                id: "c-app-a6",
                name: "Application Interaction Matrix",
                kind: ArtifactKind::Matrix,
                description: "Application dependencies",
            },
            Artifact {
                id: "c-app-a7",
                name: "Application Communication Diagram",
                kind: ArtifactKind::Diagram,
                description: "Application interactions",
            },
            Artifact {
                id: "c-app-a8",
                name: "Application and User Location Diagram",
                kind: ArtifactKind::Diagram,
                description: "Geographic distribution",
            },
            Artifact {
                id: "c-app-a9",
                name: "Application Use-Case Diagram",
                kind: ArtifactKind::Diagram,
                description: "Application use cases",
            },
            Artifact {
                id: "c-app-a10",
                name: "Enterprise Manageability Diagram",
                kind: ArtifactKind::Diagram,
                description: "Application management",
            },
            Artifact {
                id: "c-app-a11",
                name: "Process/Application Realization Diagram",
                kind: ArtifactKind::Diagram,
                description: "Business processes to applications",
            },
            Artifact {
                id: "c-app-a12",
                name: "Software Engineering Diagram",
                kind: ArtifactKind::Diagram,
                description: "Application development approach",
            },
            Artifact {
                id: "c-app-a13",
                name: "Application Migration Diagram",
                kind: ArtifactKind::Diagram,
                description: "Application migration plan",
            },
            Artifact {
                id: "c-app-a14",
                name: "Software Distribution Diagram",
                kind: ArtifactKind::Diagram,
                description: "Software deployment",
            },
        ],
        key_questions: &[
            "What applications are needed to support business capabilities?",
            "Which applications should be built vs bought vs retired?",
            "How will applications integrate?",
            "What is the application portfolio strategy?",
            "What development approach will be used?",
        ],
        stakeholder_focus: &[
            "Application Architects",
            "Development Leads",
            "Solution Architects",
            "Integration Architects",
        ],
        tips: &[
            "Consider buy vs build vs SaaS for each capability",
            "Map applications to business capabilities, not org structure",
            "Plan integration architecture alongside applications",
            "Consider application lifecycle and technical debt",
        ],
    },
    Phase {
        id: "phase-d",
        code: "D",
        name: "Technology Architecture",
        full_name: "Phase D: Technology Architecture",
        description: "Develop the Target Technology Architecture that describes the logical and physical technology components required.",
        objectives: &[
            "Develop Baseline Technology Architecture",
            "Develop Target Technology Architecture",
            "Perform gap analysis",
            "Define roadmap components",
            "Map technology to applications and data",
        ],
        inputs: &[
            "Request for Architecture Work",
            "Architecture Vision",
            "Architecture Repository",
            "Business, Data, and Application Architecture outputs",
        ],
        outputs: &[
            "Refined Architecture Vision",
            "Draft Architecture Definition Document (Technology)",
            "Draft Architecture Requirements Specification (Technology)",
            "Technology Architecture components of Architecture Roadmap",
        ],
        steps: &[
            Step {
                id: "d1",
                name: "Select reference models and tools",
                description: "Choose technology architecture viewpoints",
                tips: &[],
            },
            Step {
                id: "d2",
                name: "Develop Baseline Technology Architecture",
                description: "Document current technology landscape",
                tips: &[],
            },
            Step {
                id: "d3",
                name: "Develop Target Technology Architecture",
                description: "Design target infrastructure and platforms",
                tips: &[],
            },
            Step {
                id: "d4",
                name: "Perform gap analysis",
                description: "Identify technology changes needed",
                tips: &[],
            },
            Step {
                id: "d5",
                name: "Define roadmap components",
                description: "Plan technology implementation",
                tips: &[],
            },
            Step {
                id: "d6",
                name: "Resolve impacts",
                description: "Finalize all architecture domain impacts",
                tips: &[],
            },
            Step {
                id: "d7",
                name: "Conduct stakeholder review",
                description: "Validate with stakeholders",
                tips: &[],
            },
            Step {
                id: "d8",
                name: "Finalize Technology Architecture",
                description: "Complete and approve",
                tips: &[],
            },
            Step {
                id: "d9",
                name: "Create Architecture Definition Document",
                description: "Document the technology architecture",
                tips: &[],
            },
        ],
        deliverables: &[
            Deliverable {
                id: "d-d1",
                name: "Architecture Definition Document (Technology)",
                description: "Baseline and target technology architecture",
                required: true,
            },
            Deliverable {
                id: "d-d2",
                name: "Architecture Requirements Specification (Technology)",
                description: "Technology requirements",
                required: true,
            },
        ],
        artifacts: &[
            Artifact {
                id: "d-a1",
                name: "Technology Standards Catalog",
                kind: ArtifactKind::Catalog,
                description: "Approved technology standards",
            },
            Artifact {
                id: "d-a2",
                name: "Technology Portfolio Catalog",
                kind: ArtifactKind::Catalog,
                description: "Current and planned technology assets",
            },
            Artifact {
                id: "d-a3",
                name: "System/Technology Matrix",
                kind: ArtifactKind::Matrix,
                description: "Applications mapped to technology",
            },
            Artifact {
                id: "d-a4",
                name: "Environments and Locations Diagram",
                kind: ArtifactKind::Diagram,
                description: "Technology environments",
            },
            Artifact {
                id: "d-a5",
                name: "Platform Decomposition Diagram",
                kind: ArtifactKind::Diagram,
                description: "Platform components",
            },
            Artifact {
                id: "d-a6",
                name: "Processing Diagram",
                kind: ArtifactKind::Diagram,
                description: "Processing nodes and flows",
            },
            Artifact {
                id: "d-a7",
                name: "Networked Computing/Hardware Diagram",
                kind: ArtifactKind::Diagram,
                description: "Network and hardware topology",
            },
            Artifact {
                id: "d-a8",
                name: "Communications Engineering Diagram",
                kind: ArtifactKind::Diagram,
                description: "Network communications",
            },
        ],
        key_questions: &[
            "What technology platforms are needed?",
            "What infrastructure changes are required?",
            "What are the technology standards?",
            "How will security be implemented?",
            "What is the cloud strategy?",
        ],
        stakeholder_focus: &[
            "Infrastructure Architects",
            "Security Architects",
            "Network Engineers",
            "Platform Engineers",
        ],
        tips: &[
            "Consider cloud vs on-premise vs hybrid",
            "Address security architecture explicitly",
            "Plan for scalability and performance",
            "Consider operational requirements (monitoring, backup, DR)",
        ],
    },
    Phase {
        id: "phase-e",
        code: "E",
        name: "Opportunities & Solutions",
        full_name: "Phase E: Opportunities and Solutions",
        description: "Generate the initial complete version of the Architecture Roadmap, based on gap analysis from phases B-D.",
        objectives: &[
            "Determine whether incremental or transformational approach",
            "Identify major work packages",
            "Group work packages into Transition Architectures",
            "Develop Architecture Roadmap",
            "Ensure business value at each transition",
        ],
        inputs: &[
            "Architecture Vision",
            "Architecture Definition Document (all domains)",
            "Architecture Requirements Specification",
            "Gap analysis results from B, C, D",
        ],
        outputs: &[
            "Architecture Roadmap (initial)",
            "Transition Architectures",
            "Implementation and Migration Strategy",
            "Capability Assessment",
        ],
        steps: &[
            Step {
                id: "e1",
                name: "Determine key constraints",
                description: "Identify constraints on implementation",
                tips: &[],
            },
            Step {
                id: "e2",
                name: "Review and consolidate gap analysis",
                description: "Bring together gaps from all domains",
                tips: &[],
            },
            Step {
                id: "e3",
                name: "Review architecture requirements",
                description: "Ensure all requirements are addressed",
                tips: &[],
            },
            Step {
                id: "e4",
                name: "Consolidate and reconcile interoperability",
                description: "Address integration requirements",
                tips: &[],
            },
            Step {
                id: "e5",
                name: "Refine and validate dependencies",
                description: "Confirm project dependencies",
                tips: &[],
            },
            Step {
                id: "e6",
                name: "Confirm readiness and business transformation",
                description: "Assess organizational readiness",
                tips: &[],
            },
            Step {
                id: "e7",
                name: "Formulate Implementation Strategy",
                description: "Define the overall approach",
                tips: &[],
            },
            Step {
                id: "e8",
                name: "Identify Transition Architectures",
                description: "Define intermediate states",
                tips: &[],
            },
            Step {
                id: "e9",
                name: "Create Architecture Roadmap",
                description: "Develop the implementation roadmap",
                tips: &[],
            },
        ],
        deliverables: &[
            Deliverable {
                id: "e-d1",
                name: "Implementation and Migration Strategy",
                description: "Overall approach to implementation",
                required: true,
            },
            Deliverable {
                id: "e-d2",
                name: "Architecture Roadmap",
                description: "Phased plan for implementation",
                required: true,
            },
            Deliverable {
                id: "e-d3",
                name: "Transition Architecture",
                description: "Intermediate architecture states",
                required: false,
            },
        ],
        artifacts: &[
            Artifact {
                id: "e-a1",
                name: "Project Context Diagram",
                kind: ArtifactKind::Diagram,
                description: "Project scope and context",
            },
            Artifact {
                id: "e-a2",
                name: "Benefits Diagram",
                kind: ArtifactKind::Diagram,
                description: "Business benefits mapping",
            },
        ],
        key_questions: &[
            "What is the implementation sequence?",
            "What are the dependencies between projects?",
            "How many transition states are needed?",
            "What business value is delivered at each stage?",
            "Is the organization ready for this change?",
        ],
        stakeholder_focus: &[
            "Program Managers",
            "Portfolio Managers",
            "Business Sponsors",
            "Change Managers",
        ],
        tips: &[
            "Focus on delivering business value early",
            "Don't create too many transition architectures",
            "Consider organizational change capacity",
            "Build in flexibility for changing priorities",
        ],
    },
    Phase {
        id: "phase-f",
        code: "F",
        name: "Migration Planning",
        full_name: "Phase F: Migration Planning",
        description: "Finalize a detailed Implementation and Migration Plan that addresses how to move from the Baseline to Target Architecture.",
        objectives: &[
            "Finalize the Architecture Roadmap",
            "Ensure Implementation Plan is aligned with enterprise approach",
            "Estimate resource requirements and timings",
            "Develop Implementation and Migration Plan",
            "Confirm architecture governance for implementation",
        ],
        inputs: &[
            "Implementation and Migration Strategy",
            "Architecture Roadmap (from Phase E)",
            "Transition Architectures",
            "Implementation Factor Assessment",
        ],
        outputs: &[
            "Finalized Implementation and Migration Plan",
            "Finalized Architecture Definition Document",
            "Finalized Architecture Requirements Specification",
            "Architecture Contract",
        ],
        steps: &[
            Step {
                id: "f1",
                name: "Confirm management framework interactions",
                description: "Align with project/portfolio management",
                tips: &[],
            },
            Step {
                id: "f2",
                name: "Assign business value to work packages",
                description: "Quantify value for prioritization",
                tips: &[],
            },
            Step {
                id: "f3",
                name: "Estimate resource requirements",
                description: "Determine costs and resources",
                tips: &[],
            },
            Step {
                id: "f4",
                name: "Prioritize migration projects",
                description: "Rank projects by value and risk",
                tips: &[],
            },
            Step {
                id: "f5",
                name: "Confirm Architecture Roadmap",
                description: "Finalize the roadmap",
                tips: &[],
            },
            Step {
                id: "f6",
                name: "Generate Implementation and Migration Plan",
                description: "Create detailed plan",
                tips: &[],
            },
            Step {
                id: "f7",
                name: "Complete Architecture Development cycle",
                description: "Wrap up architecture development",
                tips: &[],
            },
        ],
        deliverables: &[
            Deliverable {
                id: "f-d1",
                name: "Implementation and Migration Plan",
                description: "Detailed plan for implementation",
                required: true,
            },
            Deliverable {
                id: "f-d2",
                name: "Architecture Contract",
                description: "Agreement between architecture and implementation",
                required: true,
            },
            Deliverable {
                id: "f-d3",
                name: "Finalized Architecture Definition Document",
                description: "Complete architecture document",
                required: true,
            },
        ],
        artifacts: &[
            Artifact {
                id: "f-a1",
                name: "Implementation Factor Assessment",
                kind: ArtifactKind::Catalog,
                description: "Factors affecting implementation",
            },
            Artifact {
                id: "f-a2",
                name: "Consolidated Gaps, Solutions, and Dependencies Matrix",
                kind: ArtifactKind::Matrix,
                description: "Comprehensive gap analysis",
            },
            Artifact {
                id: "f-a3",
                name: "Architecture Roadmap",
                kind: ArtifactKind::Diagram,
                description: "Visual roadmap of implementation",
            },
        ],
        key_questions: &[
            "What is the detailed implementation plan?",
            "How will projects be sequenced?",
            "What resources are needed?",
            "How will governance work during implementation?",
            "What are the go/no-go criteria?",
        ],
        stakeholder_focus: &["Project Managers", "Resource Managers", "Portfolio Managers", "Procurement"],
        tips: &[
            "Align with existing project methodologies",
            "Get commitment on resource allocation",
            "Build in governance checkpoints",
            "Plan for risk mitigation",
        ],
    },
    Phase {
        id: "phase-g",
        code: "G",
        name: "Implementation Governance",
        full_name: "Phase G: Implementation Governance",
        description: "Provide architectural oversight of the implementation projects. Ensure conformance with the Target Architecture.",
        objectives: &[
            "Ensure conformance with Target Architecture",
            "Perform architecture governance functions",
            "Handle change requests during implementation",
            "Update Architecture Repository",
            "Monitor implementation projects",
        ],
        inputs: &[
            "Implementation and Migration Plan",
            "Architecture Contract",
            "Architecture Definition Document",
            "Implementation project plans",
        ],
        outputs: &[
            "Architecture Contract (signed)",
            "Compliance Assessments",
            "Change Requests",
            "Architecture-compliant solutions",
        ],
        steps: &[
            Step {
                id: "g1",
                name: "Confirm scope and priorities",
                description: "Verify implementation scope",
                tips: &[],
            },
            Step {
                id: "g2",
                name: "Identify deployment resources",
                description: "Ensure resources are available",
                tips: &[],
            },
            Step {
                id: "g3",
                name: "Guide development of solutions",
                description: "Provide architecture guidance",
                tips: &[],
            },
            Step {
                id: "g4",
                name: "Perform architecture compliance reviews",
                description: "Check for compliance",
                tips: &[],
            },
            Step {
                id: "g5",
                name: "Implement business and IT operations",
                description: "Support operational changes",
                tips: &[],
            },
            Step {
                id: "g6",
                name: "Perform post-implementation review",
                description: "Assess implementation success",
                tips: &[],
            },
            Step {
                id: "g7",
                name: "Close implementation",
                description: "Complete implementation phase",
                tips: &[],
            },
        ],
        deliverables: &[
            Deliverable {
                id: "g-d1",
                name: "Architecture Contract (signed)",
                description: "Formal agreement for compliance",
                required: true,
            },
            Deliverable {
                id: "g-d2",
                name: "Compliance Assessments",
                description: "Results of compliance reviews",
                required: true,
            },
            Deliverable {
                id: "g-d3",
                name: "Implementation Governance Model",
                description: "How governance works in implementation",
                required: false,
            },
        ],
        artifacts: &[
            Artifact {
                id: "g-a1",
                name: "Architecture Compliance Review",
                kind: ArtifactKind::Catalog,
                description: "Compliance review results",
            },
        ],
        key_questions: &[
            "Are projects conforming to the architecture?",
            "What dispensations or waivers are needed?",
            "How are change requests being handled?",
            "Is the target architecture still valid?",
            "What lessons are being learned?",
        ],
        stakeholder_focus: &[
            "Project Teams",
            "Solution Architects",
            "Quality Assurance",
            "Architecture Board",
        ],
        tips: &[
            "Be pragmatic - some dispensations may be needed",
            "Keep architecture updated based on learnings",
            "Regular compliance reviews, not just at the end",
            "Document decisions and rationale",
        ],
    },
    Phase {
        id: "phase-h",
        code: "H",
        name: "Architecture Change Management",
        full_name: "Phase H: Architecture Change Management",
        description: "Establish procedures for managing change to the architecture. Monitor changes and determine whether to initiate a new ADM cycle.",
        objectives: &[
            "Ensure architecture change management process is established",
            "Monitor changes in technology and business",
            "Assess changes and determine if new cycle needed",
            "Manage architecture governance",
            "Activate the process for implementing change",
        ],
        inputs: &[
            "Implementation Governance outputs",
            "Change Requests",
            "Architecture Repository",
            "Performance metrics",
        ],
        outputs: &[
            "Architecture updates",
            "Changes to Architecture Framework",
            "New Request for Architecture Work (if needed)",
            "Statement of Architecture Work (for new cycle)",
        ],
        steps: &[
            Step {
                id: "h1",
                name: "Establish value realization process",
                description: "Track business value delivery",
                tips: &[],
            },
            Step {
                id: "h2",
                name: "Deploy monitoring tools",
                description: "Set up architecture monitoring",
                tips: &[],
            },
            Step {
                id: "h3",
                name: "Manage risks",
                description: "Monitor and mitigate architecture risks",
                tips: &[],
            },
            Step {
                id: "h4",
                name: "Provide analysis for architecture change management",
                description: "Assess change impacts",
                tips: &[],
            },
            Step {
                id: "h5",
                name: "Develop change requirements",
                description: "Document needed changes",
                tips: &[],
            },
            Step {
                id: "h6",
                name: "Manage governance process",
                description: "Execute governance procedures",
                tips: &[],
            },
            Step {
                id: "h7",
                name: "Activate process for new ADM cycle",
                description: "Initiate new cycle if needed",
                tips: &[],
            },
        ],
        deliverables: &[
            Deliverable {
                id: "h-d1",
                name: "Architecture Updates",
                description: "Changes to the architecture",
                required: true,
            },
            Deliverable {
                id: "h-d2",
                name: "Changes to Architecture Framework",
                description: "Framework improvements",
                required: false,
            },
            Deliverable {
                id: "h-d3",
                name: "Request for Architecture Work (if new cycle)",
                description: "Trigger for new ADM cycle",
                required: false,
            },
        ],
        artifacts: &[],
        key_questions: &[
            "Is the architecture still meeting business needs?",
            "What changes have occurred in technology or business?",
            "Should we start a new ADM cycle?",
            "What process improvements are needed?",
            "How effective was this architecture cycle?",
        ],
        stakeholder_focus: &[
            "Architecture Board",
            "Business Executives",
            "Change Advisory Board",
            "IT Operations",
        ],
        tips: &[
            "Establish clear thresholds for triggering new cycles",
            "Continuously monitor technology trends",
            "Build feedback loops with operations",
            "Keep architecture evergreen, not stale",
        ],
    },
    Phase {
        id: "requirements-management",
        code: "RM",
        name: "Requirements Management",
        full_name: "Requirements Management",
        description: "The process of managing architecture requirements throughout the ADM cycle. This is a continuous process that operates across all phases.",
        objectives: &[
            "Identify requirements for enterprise architecture",
            "Baseline requirements",
            "Monitor baseline requirements",
            "Identify changed requirements",
            "Assess impact of changed requirements",
            "Ensure Requirements Management process is sustained",
        ],
        inputs: &[
            "Requirements from all ADM phases",
            "Architecture Requirements Specification",
            "Change requests",
            "Impact assessments",
        ],
        outputs: &[
            "Requirements Impact Assessment",
            "Architecture Requirements Specification (updated)",
            "Recommendations on changes",
        ],
        steps: &[
            Step {
                id: "rm1",
                name: "Identify/document requirements",
                description: "Capture all requirements",
                tips: &[],
            },
            Step {
                id: "rm2",
                name: "Baseline requirements",
                description: "Establish baseline for tracking",
                tips: &[],
            },
            Step {
                id: "rm3",
                name: "Monitor baseline",
                description: "Track requirement changes",
                tips: &[],
            },
            Step {
                id: "rm4",
                name: "Identify changed requirements",
                description: "Detect requirement changes",
                tips: &[],
            },
            Step {
                id: "rm5",
                name: "Assess impact",
                description: "Evaluate impact of changes",
                tips: &[],
            },
            Step {
                id: "rm6",
                name: "Update requirements",
                description: "Modify requirements as needed",
                tips: &[],
            },
            Step {
                id: "rm7",
                name: "Implement requirements in phases",
                description: "Apply requirements to ADM phases",
                tips: &[],
            },
        ],
        deliverables: &[
            Deliverable {
                id: "rm-d1",
                name: "Architecture Requirements Specification",
                description: "Complete requirements document",
                required: true,
            },
            Deliverable {
                id: "rm-d2",
                name: "Requirements Impact Assessment",
                description: "Analysis of requirement changes",
                required: true,
            },
        ],
        artifacts: &[
            Artifact {
                id: "rm-a1",
                name: "Requirements Catalog",
                kind: ArtifactKind::Catalog,
                description: "All architecture requirements",
            },
        ],
        key_questions: &[
            "What requirements have changed?",
            "What is the impact of the change?",
            "Which phase should address this requirement?",
            "Is the requirement still valid?",
            "How should conflicting requirements be prioritized?",
        ],
        stakeholder_focus: &["Business Analysts", "All ADM Phase Stakeholders", "Requirements Managers"],
        tips: &[
            "Requirements Management spans all phases",
            "Keep requirements traceable",
            "Link requirements to business goals",
            "Have a clear change management process",
        ],
    },
];
