//! Built-in default content.
//!
//! Generated by `folio code-export`. To promote edits made at runtime, paste
//! that command's output over this file. Changing `version` makes every
//! install discard its stored copy on next start.

/// The default `AppData` document, used when storage is empty or stale.
pub(crate) const SNAPSHOT_JSON: &str = r####"
{
  "version": "1.0.2",
  "profile": {
    "name": "Alex Morgan",
    "title": "Operations Analyst and Business Studies Graduate",
    "tagline": "Turning messy processes into measurable, sustainable results.",
    "bio": "I am an operations analyst with a background in international business. I track performance metrics, find inefficiencies and help teams ship process improvements. Outside work I draw, take photos, cook and swim.",
    "email": "alex.morgan@example.com",
    "location": "Lille, France",
    "avatarUrl": "./images/profile-image.jpg",
    "heroImageUrl": "./images/banner-picture.jpg",
    "resumeUrl": "./images/resume.pdf",
    "socials": {
      "linkedin": "https://www.linkedin.com/in/example/",
      "github": "https://github.com/example"
    },
    "hobbies": [
      "Photography",
      "Cooking",
      "Swimming",
      "Arts",
      "Football"
    ]
  },
  "skills": [
    {
      "id": "1",
      "name": "Microsoft Excel",
      "category": "Tools",
      "proficiency": 85
    },
    {
      "id": "2",
      "name": "Microsoft Office",
      "category": "Tools",
      "proficiency": 80
    },
    {
      "id": "3",
      "name": "Canva",
      "category": "Tools",
      "proficiency": 80
    },
    {
      "id": "4",
      "name": "Power BI",
      "category": "Tools",
      "proficiency": 25
    },
    {
      "id": "5",
      "name": "Advanced Excel: PivotTables, VLOOKUP & XLOOKUP",
      "category": "Technical",
      "proficiency": 80
    },
    {
      "id": "6",
      "name": "Data Visualization (Tableau/Power BI)",
      "category": "Technical",
      "proficiency": 90
    },
    {
      "id": "7",
      "name": "Leadership",
      "category": "Soft Skills",
      "proficiency": 95
    },
    {
      "id": "8",
      "name": "Communication",
      "category": "Soft Skills",
      "proficiency": 95
    },
    {
      "id": "9",
      "name": "Team Work",
      "category": "Soft Skills",
      "proficiency": 90
    },
    {
      "id": "10",
      "name": "English",
      "category": "Languages",
      "proficiency": 100
    },
    {
      "id": "11",
      "name": "French",
      "category": "Languages",
      "proficiency": 30
    }
  ],
  "projects": [
    {
      "id": "1",
      "title": "Multi-Channel Retail Study",
      "description": "A comprehensive analysis of the retail store of tomorrow.",
      "fullDescription": "A four-person team study of brand DNA and omnichannel retail. I led the market research and analysis and supported the creative direction of the final presentation.",
      "technologies": [
        "MS PowerPoint",
        "Canva"
      ],
      "skillsGained": [
        "Branding",
        "Market Analysis",
        "Brand Analysis"
      ],
      "imageUrl": "./images/retail-study.png",
      "liveUrl": "https://example.com/retail-study",
      "featured": true
    },
    {
      "id": "2",
      "title": "Business Simulation",
      "description": "Ran a simulated automotive company operating on three continents.",
      "fullDescription": "Competed against six teams to maximise cumulative shareholder return while keeping a high ESG score. We ranked first in shareholder return and third in ESG.",
      "technologies": [
        "CESIM Business Simulation"
      ],
      "skillsGained": [
        "Business Analysis",
        "Data Analysis",
        "Strategy"
      ],
      "imageUrl": "./images/simulation.jpeg",
      "featured": true
    },
    {
      "id": "3",
      "title": "Market Entry Plan",
      "description": "Marketing plan for a consumer brand entering a new country.",
      "fullDescription": "Research and analysis for a market entry strategy, from competitor mapping to the launch campaign.",
      "technologies": [
        "MS PowerPoint",
        "Market Research"
      ],
      "skillsGained": [
        "Branding",
        "Advertising"
      ],
      "imageUrl": "./images/market-entry.png",
      "featured": false
    }
  ],
  "experiences": [
    {
      "id": "1",
      "role": "Masters in International Business",
      "organization": "School of Management",
      "location": "Lille, France",
      "startDate": "January 2025",
      "endDate": "current",
      "current": true,
      "description": [
        "Core subjects: Marketing, Supply Chain, Business Analytics, Project Management and Strategy.",
        "Overall GPA: 3.87"
      ],
      "type": "Education"
    },
    {
      "id": "2",
      "role": "Senior Associate (Revenue Cycle)",
      "organization": "Example Health Solutions",
      "location": "Mumbai, India",
      "startDate": "January 2022",
      "endDate": "November 2024",
      "current": false,
      "description": [
        "Full-time contract",
        "### About the company",
        "A technology-backed healthcare solutions provider.",
        "### Core Competencies & Operations",
        "Refund Execution: compliant, full-cycle refund processing.",
        "Workflow Governance: work inflow, task allocation and production tracking.",
        "### Leadership & Achievements",
        "Process Improvement: achieved a 75% reduction in a severe process backlog.",
        "Training: created and updated training materials for new hires."
      ],
      "type": "Work"
    },
    {
      "id": "3",
      "role": "Bachelors in Commerce",
      "organization": "University of Mumbai",
      "location": "Mumbai, India",
      "startDate": "July 2018",
      "endDate": "June 2021",
      "current": false,
      "description": [
        "Specialised in Accounting and Business Management."
      ],
      "type": "Education"
    }
  ],
  "posts": [],
  "theme": {
    "primaryColor": "#3b82f6",
    "fontFamily": "sans",
    "heroLayout": "split",
    "darkMode": true
  }
}
"####;
