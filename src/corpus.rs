//! Base de conocimiento estática del dominio (artículos + pares pregunta/respuesta).
//!
//! Todo el corpus se compila dentro del binario y se carga una sola vez al
//! arrancar el proceso; después es inmutable.

/// Artículo fuente de la base de conocimiento.
#[derive(Debug, Clone)]
pub struct Document {
    pub title: &'static str,
    pub text: &'static str,
}

/// Par pregunta/respuesta que guía la recuperación.
#[derive(Debug, Clone)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Fragmento a nivel de párrafo derivado de un `Document`; es la unidad
/// que se indexa y se recupera.
#[derive(Debug, Clone)]
pub struct Passage {
    pub source_title: String,
    pub text: String,
}

/// Divide cada documento en pasajes por líneas en blanco, conservando el
/// título de origen. Un documento produce uno o más pasajes.
pub fn split_passages(docs: &[Document]) -> Vec<Passage> {
    let mut passages = Vec::new();
    for doc in docs {
        for chunk in doc.text.split("\n\n") {
            let chunk = chunk.trim();
            if !chunk.is_empty() {
                passages.push(Passage {
                    source_title: doc.title.to_string(),
                    text: chunk.to_string(),
                });
            }
        }
    }
    passages
}

/// Devuelve los artículos de la base de conocimiento.
pub fn kb_docs() -> Vec<Document> {
    KB_DOCS.to_vec()
}

/// Devuelve los pares pregunta/respuesta.
pub fn faq_entries() -> Vec<FaqEntry> {
    FAQ.to_vec()
}

const KB_DOCS: &[Document] = &[
    Document {
        title: "Neurotransmitters: Dopamine",
        text: "Dopamine is a catecholamine neurotransmitter crucial for reward processing, \
motivation, motor control, and executive functions. Synthesized from tyrosine via L-DOPA, it \
acts on five receptor subtypes (D1-D5) classified into D1-like (D1, D5) and D2-like (D2, D3, \
D4) families. Major pathways: mesolimbic (VTA to nucleus accumbens; reward/motivation), \
mesocortical (VTA to prefrontal cortex; cognition), nigrostriatal (substantia nigra to \
striatum; motor control), and tuberoinfundibular (hypothalamus to pituitary; hormone \
regulation). Dysfunction implicated in Parkinson's disease (nigrostriatal degeneration), ADHD \
(prefrontal hypodopaminergia), schizophrenia (mesolimbic hyperdopaminergia hypothesis), and \
addiction (reward pathway sensitization). Medications: L-DOPA for Parkinson's, stimulants \
(methylphenidate, amphetamines) for ADHD, antipsychotics (D2 antagonists) for schizophrenia. \
Natural boosters: exercise, protein-rich diet, adequate sleep, goal-setting activities.",
    },
    Document {
        title: "Neurotransmitters: Serotonin",
        text: "Serotonin (5-HT, 5-hydroxytryptamine) modulates mood, anxiety, sleep, appetite, \
and social behavior. Synthesized from tryptophan, it acts on 14+ receptor subtypes. Major \
projections from raphe nuclei to cortex, limbic system, and spinal cord. Implicated in \
depression (monoamine hypothesis), anxiety disorders, OCD, and eating disorders. SSRIs \
(selective serotonin reuptake inhibitors) like fluoxetine, sertraline increase synaptic \
serotonin by blocking reuptake. SNRIs (serotonin-norepinephrine reuptake inhibitors) target \
both systems. 5-HT2A receptors mediate psychedelic effects. Gut produces 90% of body's \
serotonin (gut-brain axis). Natural enhancement: tryptophan-rich foods (turkey, eggs, nuts), \
sunlight exposure, exercise, probiotics. Serotonin syndrome risk with excessive medication \
combinations.",
    },
    Document {
        title: "Neurotransmitters: GABA and Glutamate",
        text: "GABA (gamma-aminobutyric acid) is the primary inhibitory neurotransmitter, \
crucial for reducing neuronal excitability and anxiety. Acts on GABA-A (ionotropic, fast \
inhibition) and GABA-B (metabotropic, slow inhibition) receptors. Benzodiazepines and \
barbiturates enhance GABA-A function, used for anxiety and seizures. Glutamate is the primary \
excitatory neurotransmitter, essential for learning, memory via LTP, and neuroplasticity. \
Acts on ionotropic (AMPA, NMDA, kainate) and metabotropic (mGluR) receptors. NMDA receptor \
crucial for synaptic plasticity and learning. Excitotoxicity from excessive glutamate causes \
neuronal damage in stroke, TBI, neurodegenerative diseases. Balance between excitation \
(glutamate) and inhibition (GABA) critical for brain function. Imbalances linked to epilepsy, \
anxiety, schizophrenia, autism spectrum disorders.",
    },
    Document {
        title: "Neurotransmitters: Acetylcholine, Norepinephrine, Others",
        text: "Acetylcholine (ACh) mediates attention, learning, memory, and muscle \
contraction. Cholinergic projections from basal forebrain (nucleus basalis) to cortex and \
hippocampus. Acts on nicotinic (ionotropic) and muscarinic (metabotropic) receptors. \
Depletion in Alzheimer's disease; acetylcholinesterase inhibitors (donepezil, rivastigmine) \
used as treatment. Norepinephrine (noradrenaline) from locus coeruleus modulates arousal, \
attention, stress response. Implicated in depression, PTSD, ADHD. SNRIs and tricyclic \
antidepressants increase norepinephrine. Endorphins (endogenous opioids) mediate pain relief, \
reward, stress response; released during exercise ('runner's high'), laughter, social \
bonding. Oxytocin ('love hormone') promotes social bonding, trust, empathy, uterine \
contractions, lactation; potential therapeutic target for autism, social anxiety. \
Endocannabinoids modulate pain, appetite, mood, memory via CB1/CB2 receptors.",
    },
    Document {
        title: "Brain Regions: Prefrontal Cortex",
        text: "The prefrontal cortex (PFC) is the anterior portion of frontal lobes, critical \
for executive functions, planning, decision-making, personality, social behavior. \
Subdivisions: dorsolateral PFC (DLPFC) for working memory, cognitive flexibility, planning; \
ventromedial PFC (vmPFC) for emotion regulation, reward valuation, moral reasoning; \
orbitofrontal cortex (OFC) for reward processing, impulse control; anterior cingulate cortex \
(ACC) for conflict monitoring, error detection, emotion. PFC not fully mature until mid-20s, \
explaining adolescent risk-taking. Damage causes impulsivity, poor planning, personality \
changes (Phineas Gage case). Dysfunction in ADHD (hypoactivation), depression (decreased \
metabolism), schizophrenia (hypofrontality). Treatments: cognitive training, stimulants for \
ADHD, psychotherapy, TMS targeting DLPFC for depression. Enhanced by adequate sleep, \
exercise, stress management, cognitive challenges.",
    },
    Document {
        title: "Brain Regions: Hippocampus and Memory Systems",
        text: "Hippocampus in medial temporal lobe is critical for forming new explicit \
(declarative) memories and spatial navigation. Contains place cells and grid cells for \
spatial mapping. Subregions: dentate gyrus (neurogenesis site), CA fields (CA1-CA4), \
subiculum. Consolidation theory: hippocampus temporarily stores memories before cortical \
consolidation. Patient H.M. (bilateral hippocampal removal) demonstrated anterograde amnesia \
while preserving procedural memory, confirming multiple memory systems. Vulnerable to stress \
(cortisol), hypoxia, Alzheimer's disease (early atrophy). Atrophy linked to depression, PTSD, \
chronic stress. Neurogenesis in dentate gyrus enhanced by exercise, learning, enriched \
environments. Procedural memory (skills, habits) relies on basal ganglia and cerebellum, \
spared in hippocampal damage. Working memory uses prefrontal-parietal networks. Emotional \
memory involves amygdala-hippocampus interaction.",
    },
    Document {
        title: "Brain Regions: Amygdala and Emotion",
        text: "Amygdala is almond-shaped limbic structure crucial for processing emotions, \
especially fear, threat detection, emotional memory formation. Receives sensory input \
directly (fast, unconscious route) and via thalamus-cortex (slow, conscious route). Projects \
to hypothalamus (autonomic responses), periaqueductal gray (freezing), hippocampus (emotional \
memory), prefrontal cortex (regulation). Central nucleus orchestrates fear responses. \
Basolateral complex integrates sensory and contextual information. Hyperactivity linked to \
anxiety disorders, PTSD (failed fear extinction), depression, aggression. Hypoactivity in \
psychopathy (reduced fear response). Fear conditioning paradigm used to study learning. \
Extinction learning (safety learning) requires ventromedial PFC to inhibit amygdala. \
Treatments: exposure therapy (enhances extinction), SSRIs (reduce hyperactivity), propranolol \
(blocks reconsolidation). Enhanced emotional intelligence involves amygdala-prefrontal \
balance.",
    },
    Document {
        title: "Brain Regions: Basal Ganglia and Motor Control",
        text: "Basal ganglia are subcortical nuclei (striatum, globus pallidus, substantia \
nigra, subthalamic nucleus) critical for motor control, habit formation, reward learning, \
action selection. Direct pathway (Go) facilitates movement via D1 receptors; indirect pathway \
(NoGo) inhibits movement via D2 receptors. Parkinson's disease results from dopaminergic \
neuronal loss in substantia nigra pars compacta, causing tremor, rigidity, bradykinesia, \
postural instability. Treatments: L-DOPA (dopamine precursor), dopamine agonists, MAO-B \
inhibitors, deep brain stimulation of subthalamic nucleus or globus pallidus interna. \
Huntington's disease involves striatal degeneration causing chorea, cognitive decline. \
Obsessive-compulsive disorder linked to cortico-striato-thalamo-cortical loop dysfunction. \
Tourette syndrome involves basal ganglia hyperactivity. Habit formation transitions from \
goal-directed (prefrontal-striatal) to habitual (sensorimotor striatum) with practice.",
    },
    Document {
        title: "Neurological Disorders: ADHD",
        text: "Attention-Deficit/Hyperactivity Disorder (ADHD) is neurodevelopmental disorder \
characterized by inattention, hyperactivity, impulsivity. Prevalence ~5% children, often \
persists into adulthood. Neurobiological basis: frontostriatal dysfunction, delayed brain \
maturation, reduced dopamine and norepinephrine signaling in prefrontal cortex. Structural \
findings: reduced volume in prefrontal cortex, basal ganglia, cerebellum. Three subtypes: \
predominantly inattentive, predominantly hyperactive-impulsive, combined. Comorbidities: \
learning disabilities, anxiety, depression, oppositional defiant disorder. Diagnosis via \
clinical criteria (DSM-5), behavioral assessments. Treatments: stimulants (methylphenidate, \
amphetamines; enhance dopamine/norepinephrine; 70-80% response), non-stimulants (atomoxetine, \
guanfacine, clonidine), behavioral therapy, cognitive training, educational accommodations. \
Natural approaches: exercise, adequate sleep, omega-3 fatty acids, elimination of food \
additives, mindfulness training, structure and routines.",
    },
    Document {
        title: "Neurological Disorders: Depression and Anxiety",
        text: "Major Depressive Disorder (MDD) involves persistent low mood, anhedonia, \
cognitive impairment, vegetative symptoms. Neurobiological factors: monoamine deficiency \
(serotonin, norepinephrine, dopamine), HPA axis dysregulation, hippocampal atrophy, reduced \
neuroplasticity, inflammation. Brain changes: decreased activity in dorsolateral PFC, \
increased activity in amygdala and default mode network. Treatments: SSRIs, SNRIs, bupropion \
(dopamine/norepinephrine), tricyclics, MAO inhibitors, psychotherapy (CBT, IPT), ECT for \
treatment-resistant cases, TMS, ketamine for rapid relief, exercise (comparable to medication \
in mild-moderate cases), light therapy for seasonal affective disorder. Anxiety disorders \
(GAD, panic, social anxiety, phobias, OCD) involve amygdala hyperactivity, reduced prefrontal \
regulation. Treatments: SSRIs, benzodiazepines (short-term), buspirone, CBT (especially \
exposure therapy), mindfulness, relaxation techniques. Natural approaches: exercise, \
omega-3s, adequate sleep, stress management, yoga, meditation, limiting caffeine.",
    },
    Document {
        title: "Neurological Disorders: Neurodegenerative Diseases",
        text: "Alzheimer's Disease (AD) is most common dementia, characterized by progressive \
memory loss, cognitive decline. Pathology: amyloid-beta plaques, tau neurofibrillary tangles, \
starting in hippocampus and spreading. Cholinergic deficit from basal forebrain degeneration. \
Risk factors: age, APOE4 allele, cardiovascular disease. Treatments: acetylcholinesterase \
inhibitors (donepezil, rivastigmine, galantamine), memantine (NMDA antagonist), new \
anti-amyloid antibodies (aducanumab, lecanemab). Prevention: cognitive engagement, exercise, \
Mediterranean diet, social interaction, managing cardiovascular risk. Parkinson's Disease: \
motor symptoms from dopaminergic loss in substantia nigra; also causes cognitive impairment, \
depression. Treatments: L-DOPA, dopamine agonists, MAO-B inhibitors, COMT inhibitors, DBS. \
Multiple Sclerosis: autoimmune demyelination causing varied neurological symptoms; \
disease-modifying therapies reduce relapses. ALS: motor neuron degeneration; riluzole and \
edaravone slow progression.",
    },
    Document {
        title: "Brain Imaging Modalities: Structural and Functional",
        text: "fMRI (functional MRI) measures blood-oxygen-level dependent (BOLD) signals as \
proxy for neural activity. High spatial resolution (~1-3mm), poor temporal resolution (~2s). \
Used for mapping brain activation during tasks, resting-state connectivity. Limitations: \
hemodynamic lag, susceptibility artifacts, correlation not causation. EEG \
(electroencephalography) records scalp electrical potentials from neuronal activity. \
Excellent temporal resolution (milliseconds), poor spatial resolution. ERP (event-related \
potentials) are time-locked averages. Used for studying cognitive processing stages, clinical \
diagnosis (epilepsy, sleep). MEG (magnetoencephalography) measures magnetic fields; better \
spatial localization than EEG. PET (positron emission tomography) uses radiotracers for \
metabolism, neurotransmitter receptors, amyloid imaging. Structural MRI: T1-weighted for \
anatomy, T2/FLAIR for pathology. DTI/DSI: diffusion imaging for white matter tracts. TMS: \
transcranial magnetic stimulation for causal interventions, depression treatment. fNIRS: \
functional near-infrared spectroscopy for portable brain imaging.",
    },
    Document {
        title: "Cognitive Functions: Memory Systems",
        text: "Memory systems: Declarative (explicit) memory includes episodic (personal \
events, hippocampus-dependent) and semantic (facts, knowledge, temporal cortex). \
Non-declarative (implicit) includes procedural (skills, habits; basal ganglia/cerebellum), \
priming (perceptual facilitation), classical conditioning (emotional responses, amygdala). \
Working memory (prefrontal-parietal) holds information temporarily for manipulation. \
Atkinson-Shiffrin model: sensory -> short-term -> long-term memory. Consolidation: synaptic \
(immediate, LTP-dependent) and systems (gradual, hippocampus to cortex). Sleep crucial for \
consolidation, especially REM for emotional and slow-wave for declarative. Retrieval involves \
reconstruction, not playback; susceptible to distortion, false memories. Enhancement \
strategies: spaced repetition, elaborative encoding, retrieval practice, sleep, exercise, \
mnemonics, reducing interference. Forgetting: decay, interference (proactive/retroactive), \
retrieval failure. Memory disorders: amnesia (retrograde/anterograde), dementia, dissociative \
disorders.",
    },
    Document {
        title: "Cognitive Functions: Attention and Executive Functions",
        text: "Attention involves selecting relevant information while filtering distractions. \
Networks: dorsal attention (goal-directed, top-down; frontal eye fields, intraparietal \
sulcus), ventral attention (stimulus-driven, bottom-up; temporoparietal junction, ventral \
frontal cortex), alerting (maintaining vigilance; locus coeruleus, right frontal/parietal). \
Selective attention (focus on target), divided attention (multitasking; limited capacity), \
sustained attention (vigilance). Executive functions are high-level cognitive processes: \
working memory, cognitive flexibility (set-shifting), inhibitory control (response \
inhibition). Depend on prefrontal cortex, especially DLPFC. Central executive in Baddeley's \
model coordinates subsystems. Impairments in ADHD, traumatic brain injury, schizophrenia, \
aging, frontal lobe damage. Enhancement: cognitive training (dual n-back), physical exercise, \
adequate sleep, reducing multitasking, mindfulness meditation, challenging mental activities. \
Attention restoration theory: nature exposure improves attentional capacity.",
    },
    Document {
        title: "Cognitive Functions: Decision-Making and Reward",
        text: "Decision-making involves evaluating options, predicting outcomes, selecting \
actions. Dual-process theory: System 1 (fast, automatic, emotional; amygdala, striatum) vs \
System 2 (slow, deliberative, rational; prefrontal cortex). Somatic marker hypothesis \
(Damasio): emotion-based signals guide decisions. Ventromedial PFC integrates emotion and \
cognition; damage causes poor real-world decisions despite intact intellect. Orbitofrontal \
cortex encodes reward value, updates predictions. Iowa Gambling Task assesses decision-making \
under uncertainty. Reward processing involves mesolimbic dopamine pathway (VTA to nucleus \
accumbens). Prediction error signals learning: positive (better than expected), negative \
(worse than expected). Temporal discounting: preference for immediate over delayed rewards; \
steeper in impulsivity, addiction. Risk-taking involves balancing potential rewards and \
losses; influenced by age, stress, individual differences. Neuroeconomics combines \
neuroscience and economics to study choice. Biases: framing effect, sunk cost fallacy, loss \
aversion, anchoring.",
    },
    Document {
        title: "Neuroplasticity and Brain Health",
        text: "Neuroplasticity is the brain's ability to reorganize structure and function in \
response to experience, learning, injury. Mechanisms: synaptic plasticity (LTP, LTD; changes \
in connection strength), structural plasticity (dendritic branching, synaptogenesis, \
neurogenesis in hippocampus), functional reorganization (cortical remapping). \
Experience-dependent plasticity: enriched environments enhance cognition, brain volume. \
Critical periods in development for sensory systems, language. Adult neurogenesis in dentate \
gyrus enhanced by exercise, learning, antidepressants; inhibited by stress, aging. Recovery \
after stroke depends on reorganization of adjacent cortex, unaffected hemisphere. \
Constraint-induced movement therapy enhances motor recovery. Brain health optimization: \
aerobic exercise (increases BDNF, neurogenesis, hippocampal volume), cognitive engagement \
(learning new skills, 'use it or lose it'), Mediterranean diet (omega-3s, antioxidants), \
social interaction, adequate sleep (7-9 hours; consolidates memories, clears metabolites), \
stress management, avoiding smoking and excessive alcohol. Brain training games show limited \
transfer to real-world cognition; novel, challenging activities more effective.",
    },
    Document {
        title: "Psychiatric Treatments: Pharmacological",
        text: "Antidepressants: SSRIs (fluoxetine, sertraline, escitalopram; first-line, 4-6 \
weeks onset), SNRIs (venlafaxine, duloxetine; effective for pain, anxiety), bupropion \
(dopamine/norepinephrine; less sexual side effects), mirtazapine (sedating, increases \
appetite), tricyclics (amitriptyline; effective but more side effects), MAO inhibitors \
(phenelzine; dietary restrictions). Anxiolytics: benzodiazepines (diazepam, alprazolam; \
fast-acting, dependence risk), buspirone (slow onset, no dependence), SSRIs (first-line for \
chronic anxiety). Antipsychotics: typical (haloperidol; D2 antagonists; extrapyramidal side \
effects), atypical (risperidone, olanzapine, quetiapine; lower EPS, metabolic side effects; \
treat schizophrenia, bipolar, augmentation in depression). Mood stabilizers: lithium (gold \
standard for bipolar; narrow therapeutic window), valproate, lamotrigine, carbamazepine. \
Stimulants: methylphenidate, amphetamines (ADHD, narcolepsy). Cognitive enhancers: memantine \
(Alzheimer's), modafinil (wakefulness). Emerging: psychedelics (psilocybin, MDMA) for \
depression, PTSD; ketamine for rapid antidepressant effects.",
    },
    Document {
        title: "Psychiatric Treatments: Non-Pharmacological",
        text: "Psychotherapy: Cognitive-Behavioral Therapy (CBT; restructuring thoughts, \
behavioral activation; evidence-based for depression, anxiety, OCD, PTSD, insomnia), \
Dialectical Behavior Therapy (DBT; mindfulness, emotion regulation; borderline personality \
disorder), Acceptance and Commitment Therapy (ACT; psychological flexibility), psychodynamic \
therapy (insight-oriented), interpersonal therapy (relationship focus). Exposure therapy for \
anxiety disorders, PTSD (prolonged exposure, virtual reality exposure). EMDR (eye movement \
desensitization and reprocessing) for trauma. Brain stimulation: Electroconvulsive Therapy \
(ECT; induced seizure; highly effective for severe depression, catatonia), Transcranial \
Magnetic Stimulation (TMS; magnetic pulses to DLPFC; FDA-approved for depression), \
transcranial Direct Current Stimulation (tDCS; weak electrical current), Vagus Nerve \
Stimulation (VNS; implanted device), Deep Brain Stimulation (DBS; electrodes in brain; severe \
OCD, depression, Parkinson's). Lifestyle interventions: exercise (aerobic and resistance; \
antidepressant effects), sleep hygiene, nutrition, stress reduction (mindfulness, yoga, \
meditation), social support, light therapy (SAD).",
    },
    Document {
        title: "Research Methods and Experimental Design",
        text: "Within-subject designs increase power by reducing between-participant variance \
but risk carryover effects; counterbalancing mitigates order effects. Between-subject designs \
avoid carryover but require larger samples. Mixed designs combine both. Key threats: \
confounds, motion artifacts (in fMRI/EEG), physiological noise, multiple comparisons problem. \
Common analyses: General Linear Model (GLM) for fMRI/EEG, time-frequency analysis, \
connectivity (functional, effective), machine learning (pattern classification, predictive \
modeling). Multiple comparison correction: family-wise error rate (Bonferroni, cluster-based \
permutation), false discovery rate (FDR; more liberal). Effect sizes (Cohen's d, partial \
eta-squared) and confidence intervals essential. Power analysis determines sample size \
(typically .80 power for detecting medium effects). Pre-registration reduces publication \
bias, p-hacking. Open science practices: data/code sharing, preprints, registered reports. \
Replication crisis in psychology/neuroscience. Causal inference: randomized controlled \
trials, natural experiments, instrumental variables, lesion studies, TMS.",
    },
    Document {
        title: "Neuroethics and Responsible Research",
        text: "Obtain informed consent, minimize risk, protect privacy (especially with \
neuroimaging datasets, genetic information). Avoid overinterpreting correlational imaging \
results as causal ('reverse inference' problem). Report incidental findings policies in MRI \
studies (unexpected abnormalities). Neuroenhancement ethics: cognitive enhancers (Modafinil, \
stimulants) in healthy individuals raises fairness, coercion, authenticity concerns. \
Brain-computer interfaces (BCIs) for paralyzed patients raise autonomy, privacy, agency \
issues. Neurotechnology in criminal justice: brain-based lie detection, responsibility \
assessment; concerns about validity, coercion. 'Neuromyths' in education (learning styles, \
left/right brain) lack scientific support. Dual-use dilemma: research on aggression, \
deception could be misused. Responsible conduct: transparent reporting, avoiding \
sensationalism, acknowledging limitations, diversity in samples (WEIRD populations \
overrepresented), reproducibility, conflicts of interest disclosure. Public engagement and \
science communication important for informed societal decisions about neurotechnology.",
    },
];

const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What is the temporal resolution of EEG vs fMRI?",
        answer: "EEG: millisecond temporal resolution; fMRI: seconds-level (hemodynamic) \
temporal resolution.",
    },
    FaqEntry {
        question: "How does LTP relate to memory?",
        answer: "LTP (long-term potentiation) is a synaptic plasticity mechanism believed to \
underlie learning and memory.",
    },
    FaqEntry {
        question: "When should I use a within-subject design?",
        answer: "Use within-subject when you want more power and expect stable performance; \
watch for order/carryover effects and counterbalance.",
    },
    FaqEntry {
        question: "What is dopamine's role in the brain?",
        answer: "Dopamine regulates reward, motivation, motor control, and executive functions \
through mesolimbic, mesocortical, and nigrostriatal pathways.",
    },
    FaqEntry {
        question: "How do SSRIs work?",
        answer: "SSRIs (Selective Serotonin Reuptake Inhibitors) block serotonin reuptake, \
increasing synaptic serotonin availability; used for depression and anxiety.",
    },
    FaqEntry {
        question: "What causes Parkinson's disease?",
        answer: "Parkinson's results from dopaminergic neuronal loss in substantia nigra pars \
compacta, causing motor symptoms like tremor, rigidity, and bradykinesia.",
    },
    FaqEntry {
        question: "What is the role of the hippocampus?",
        answer: "Hippocampus is critical for forming new explicit memories and spatial \
navigation; damage causes anterograde amnesia.",
    },
    FaqEntry {
        question: "How does neuroplasticity work?",
        answer: "Neuroplasticity involves synaptic changes (LTP/LTD), structural changes \
(dendritic growth, neurogenesis), and functional reorganization in response to experience.",
    },
    FaqEntry {
        question: "What are the symptoms of ADHD?",
        answer: "ADHD involves inattention, hyperactivity, and impulsivity; caused by \
frontostriatal dysfunction and reduced dopamine/norepinephrine signaling.",
    },
    FaqEntry {
        question: "What treatments exist for depression?",
        answer: "Depression treatments include SSRIs, SNRIs, psychotherapy (CBT), TMS, ECT for \
severe cases, and lifestyle changes like exercise.",
    },
    FaqEntry {
        question: "What is the amygdala's function?",
        answer: "Amygdala processes emotions, especially fear and threat detection; involved \
in emotional memory formation and autonomic responses.",
    },
    FaqEntry {
        question: "How does exercise benefit the brain?",
        answer: "Exercise increases BDNF, promotes neurogenesis, enhances hippocampal volume, \
improves mood, and has antidepressant effects.",
    },
    FaqEntry {
        question: "What is the prefrontal cortex responsible for?",
        answer: "Prefrontal cortex handles executive functions, planning, decision-making, \
impulse control, working memory, and personality.",
    },
];
