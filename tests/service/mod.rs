mod war;
