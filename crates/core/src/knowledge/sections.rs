use crate::types::KnowledgeSection;

/// Website content indexed for the chatbot, in page order.
pub const BUILTIN_SECTIONS: &[KnowledgeSection] = &[
    KnowledgeSection {
        page: "home",
        section: "welcome",
        content: "Welcome to KNSOFT Technologies! We are a software development and IT consulting \
                  company helping businesses grow with reliable, modern technology.",
        keywords: &["hello", "hi there", "welcome", "greetings", "homepage"],
        context: "Homepage welcome message greeting visitors to the website.",
    },
    KnowledgeSection {
        page: "about",
        section: "company_overview",
        content: "KNSOFT Technologies was founded in 2011 and has grown into a trusted technology \
                  partner for startups, enterprises and public sector organizations. Our team of \
                  engineers, designers and consultants delivers end-to-end software solutions with \
                  a focus on quality, transparency and long-term partnership.",
        keywords: &["about", "company", "knsoft", "history", "who we are", "founded", "overview", "team"],
        context: "Company background, founding story and team overview.",
    },
    KnowledgeSection {
        page: "about",
        section: "achievements",
        content: "Over 13+ years we have completed 1000+ projects for 500+ satisfied clients across \
                  25+ countries, earning recognition for on-time delivery and lasting client \
                  relationships.",
        keywords: &["achievements", "clients", "projects", "experience", "countries", "awards", "milestones", "years"],
        context: "Company milestones, client numbers and delivery track record.",
    },
    KnowledgeSection {
        page: "about",
        section: "mission_vision",
        content: "Our mission is to empower businesses through innovative, scalable and secure \
                  digital solutions. Our vision is to be a globally recognized technology partner \
                  known for engineering excellence and customer success.",
        keywords: &["mission", "vision", "values", "goals", "purpose"],
        context: "Mission statement and long-term vision of the company.",
    },
    KnowledgeSection {
        page: "services",
        section: "core_services",
        content: "We offer custom software development, web application development, mobile app \
                  development, cloud solutions, IT consulting, UI/UX design and quality assurance \
                  and testing.",
        keywords: &["services", "software development", "web development", "mobile apps", "cloud", "consulting", "design", "testing", "offer"],
        context: "Primary service lines offered to clients.",
    },
    KnowledgeSection {
        page: "services",
        section: "services_offered",
        content: "Every engagement covers the full lifecycle: discovery and requirements analysis, \
                  architecture and design, agile development, rigorous testing, deployment and \
                  ongoing maintenance with 24/7 support.",
        keywords: &["services", "development process", "lifecycle", "maintenance", "support", "agile", "deployment"],
        context: "How service engagements are delivered from discovery to maintenance.",
    },
    KnowledgeSection {
        page: "services",
        section: "specialized_services",
        content: "Our specialized practices include artificial intelligence and machine learning, \
                  data analytics and business intelligence, DevOps automation, cybersecurity and \
                  enterprise resource planning (ERP) solutions.",
        keywords: &["artificial intelligence", "machine learning", "analytics", "devops", "cybersecurity", "security", "automation", "solutions"],
        context: "Specialized and emerging technology practices.",
    },
    KnowledgeSection {
        page: "services",
        section: "industries",
        content: "We serve clients in healthcare, finance and banking, retail and e-commerce, \
                  education, logistics and manufacturing.",
        keywords: &["industries", "healthcare", "finance", "banking", "retail", "ecommerce", "education", "logistics", "manufacturing"],
        context: "Industry verticals served by the company.",
    },
    KnowledgeSection {
        page: "technology",
        section: "technology_stack",
        content: "Our engineers work with React, Angular and Vue on the frontend; Node.js, Python, \
                  Java and .NET on the backend; Flutter and React Native for mobile; and AWS, Azure \
                  and Google Cloud for infrastructure, backed by PostgreSQL, MongoDB, Docker and \
                  Kubernetes.",
        keywords: &["technology", "technologies", "tech stack", "programming", "languages", "frameworks", "tools", "react", "python", "java"],
        context: "Programming languages, frameworks and platforms used in projects.",
    },
    KnowledgeSection {
        page: "careers",
        section: "why_work_with_us",
        content: "At KNSOFT you will work on challenging projects for global clients, learn from \
                  experienced mentors, and grow with continuous training, flexible work arrangements \
                  and a collaborative, inclusive culture.",
        keywords: &["careers", "career", "jobs", "hiring", "work with us", "employment", "opportunities", "culture", "join"],
        context: "Reasons to build a career at the company.",
    },
    KnowledgeSection {
        page: "careers",
        section: "open_positions",
        content: "We regularly hire software engineers, QA analysts, UI/UX designers, project \
                  managers and interns. Visit our Careers page to see current openings and apply \
                  online.",
        keywords: &["openings", "positions", "vacancies", "apply", "internship", "hiring"],
        context: "Roles the company typically recruits for.",
    },
    KnowledgeSection {
        page: "contact",
        section: "contact_details",
        content: "You can reach us by email at info@knsofttech.com or by phone at +91 40 4852 6789, \
                  Monday to Saturday, 9:00 AM to 7:00 PM IST. Our support desk is available 24/7 \
                  for existing clients.",
        keywords: &["contact", "email", "phone", "reach", "call", "support", "get in touch"],
        context: "Email, phone and business hours for reaching the company.",
    },
    KnowledgeSection {
        page: "contact",
        section: "office_locations",
        content: "Our headquarters is in Hyderabad, India, with a branch office in Houston, USA and a \
                  development center in Guntur, India.",
        keywords: &["office", "offices", "location", "locations", "address", "headquarters", "hyderabad", "houston", "guntur", "branch"],
        context: "Physical office addresses of all branches.",
    },
];
